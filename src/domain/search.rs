use crate::prelude::Contact;

/// Contacts whose first name starts with `search`, ignoring case.
///
/// Only the first whitespace-delimited token of the name is considered, so
/// "Ann Lee" matches "an" and "ann" but not "lee". An empty search keeps
/// every contact. Order is preserved.
pub fn filter_by_first_name<'a, I>(contacts: I, search: &str) -> Vec<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let search = search.to_lowercase();

    contacts
        .into_iter()
        .filter(|c| c.first_name().starts_with(&search))
        .collect()
}
