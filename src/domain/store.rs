use super::*;

/// Client-side copy of the phonebook.
///
/// Keeps the order the service returned on load, appends new contacts at the
/// end and replaces updated ones in place. Every mutation bumps `version`, so
/// a completion can tell whether the list moved on since its request left.
#[derive(Debug, Default, Clone)]
pub struct ContactList {
    contacts: Vec<Contact>,
    version: u64,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            version: 0,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contact whose name equals `name` ignoring case. Whitespace counts.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        let name = name.to_lowercase();
        self.contacts.iter().find(|c| c.has_name(&name))
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        self.bump();
    }

    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
        self.bump();
    }

    /// Swaps the contact carrying `id` for `contact`, keeping its position.
    pub fn replace(&mut self, id: &ContactId, contact: Contact) -> Result<(), AppError> {
        match self.contacts.iter_mut().find(|c| &c.id == id) {
            Some(slot) => {
                *slot = contact;
                self.bump();
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Contact {id}"))),
        }
    }

    pub fn remove(&mut self, id: &ContactId) -> Result<Contact, AppError> {
        match self.contacts.iter().position(|c| &c.id == id) {
            Some(index) => {
                let removed = self.contacts.remove(index);
                self.bump();
                Ok(removed)
            }
            None => Err(AppError::NotFound(format!("Contact {id}"))),
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
