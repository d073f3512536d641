pub mod memory;
pub mod remote;

use crate::prelude::{AppError, Contact, ContactId, NewContact};
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3001/persons";

/// The phonebook service as the controller sees it.
pub trait ContactGateway {
    fn get_all(&self) -> Result<Vec<Contact>, AppError>;

    fn create(&self, contact: &NewContact) -> Result<Contact, AppError>;

    fn update(&self, id: &ContactId, contact: &Contact) -> Result<Contact, AppError>;

    fn remove(&self, id: &ContactId) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Remote,
    Mem,
}

impl StorageMediums {
    pub fn is_remote(&self) -> bool {
        matches!(self, StorageMediums::Remote)
    }

    pub fn is_which(&self) -> &str {
        if self.is_remote() { "remote" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "remote" => Ok(StorageMediums::Remote),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

/// Builds the gateway for `medium`. `url` and `timeout` only matter for the
/// remote service.
pub fn parse_storage_type(
    medium: StorageMediums,
    url: &str,
    timeout: Duration,
) -> Result<Box<dyn ContactGateway>, AppError> {
    match medium {
        StorageMediums::Remote => Ok(Box::new(remote::RemoteStorage::new(url, timeout)?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_mediums() -> Result<(), AppError> {
        assert_eq!(StorageMediums::from("remote")?, StorageMediums::Remote);
        assert_eq!(StorageMediums::from(" MEM ")?, StorageMediums::Mem);
        assert!(StorageMediums::from("json").is_err());
        Ok(())
    }

    #[test]
    fn builds_requested_medium() -> Result<(), AppError> {
        let timeout = Duration::from_secs(1);

        let mem = parse_storage_type(StorageMediums::Mem, "", timeout)?;
        assert_eq!(mem.get_medium(), "mem");

        let remote = parse_storage_type(StorageMediums::Remote, DEFAULT_SERVICE_URL, timeout)?;
        assert_eq!(remote.get_medium(), "remote");
        Ok(())
    }

    #[test]
    fn rejects_bad_remote_url() {
        let res = parse_storage_type(
            StorageMediums::Remote,
            "not a url",
            Duration::from_secs(1),
        );
        assert!(matches!(res, Err(AppError::InvalidUrl(_))));
    }
}
