use super::{AppError, Contact, ContactGateway, ContactId, NewContact};
use std::cell::RefCell;
use uuid::Uuid;

/// In-process stand-in for the phonebook service. Ids are random uuids,
/// much like json-server hands out opaque text ids.
pub struct MemStorage {
    pub medium: String,
    data: RefCell<Vec<Contact>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(contacts),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactGateway for MemStorage {
    fn get_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn create(&self, contact: &NewContact) -> Result<Contact, AppError> {
        let id = ContactId::Text(Uuid::new_v4().to_string());
        let created = contact.clone().into_contact(id);

        self.data.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update(&self, id: &ContactId, contact: &Contact) -> Result<Contact, AppError> {
        let mut data = self.data.borrow_mut();
        let slot = data
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

        // The path decides which record is written, never the body.
        *slot = Contact {
            id: id.clone(),
            ..contact.clone()
        };
        Ok(slot.clone())
    }

    fn remove(&self, id: &ContactId) -> Result<(), AppError> {
        let mut data = self.data.borrow_mut();
        let before = data.len();
        data.retain(|c| &c.id != id);

        if data.len() == before {
            return Err(AppError::NotFound(format!("Contact {id}")));
        }
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_fresh_ids() -> Result<(), AppError> {
        let storage = MemStorage::new();

        let a = storage.create(&NewContact::new("Ada", "1"))?;
        let b = storage.create(&NewContact::new("Bob", "2"))?;

        assert_ne!(a.id, b.id);
        assert_eq!(storage.get_all()?, vec![a, b]);
        Ok(())
    }

    #[test]
    fn update_and_remove_unknown_id_fail() {
        let storage = MemStorage::new();
        let ghost = Contact::new(1u64, "Ghost", "0");

        assert!(matches!(
            storage.update(&ghost.id, &ghost),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            storage.remove(&ghost.id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn update_replaces_in_place() -> Result<(), AppError> {
        let storage = MemStorage::with_contacts(vec![
            Contact::new(1u64, "Ada", "1"),
            Contact::new(2u64, "Bob", "2"),
        ]);

        let updated = storage.update(&ContactId::Number(1), &Contact::new(1u64, "Ada", "9"))?;

        assert_eq!(updated.number, "9");
        assert_eq!(storage.get_all()?[0].number, "9");
        assert_eq!(storage.get_all()?.len(), 2);
        Ok(())
    }
}
