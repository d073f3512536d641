use std::fmt;

use super::*;
use serde::{Deserialize, Serialize};

pub const NAME_REQ: &str = "Name must not be empty";

/// Identifier assigned by the phonebook service.
///
/// Backends hand out either text ids (`"a1f3"`) or integers (`3`). The id is
/// kept in whatever shape the service chose so it goes back on the wire
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Number(u64),
    Text(String),
}

impl ContactId {
    /// Parses user input (e.g. `--id 7`) into an id. Digits become a numeric
    /// id, anything else stays text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<u64>() {
            Ok(n) => ContactId::Number(n),
            Err(_) => ContactId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Number(n) => write!(f, "{n}"),
            ContactId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        ContactId::Text(value.to_string())
    }
}

impl From<u64> for ContactId {
    fn from(value: u64) -> Self {
        ContactId::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,

    #[serde(default)]
    pub number: String,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: &str, number: &str) -> Self {
        Contact {
            id: id.into(),
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    /// Copy of this contact carrying a replacement number. Id and name casing
    /// are kept.
    pub fn with_number(&self, number: &str) -> Self {
        Contact {
            number: number.to_string(),
            ..self.clone()
        }
    }

    /// Case-insensitive comparison against an already lowercased name.
    pub fn has_name(&self, lowercase_name: &str) -> bool {
        self.name.to_lowercase() == lowercase_name
    }

    /// First whitespace-delimited token of the name, lowercased.
    pub fn first_name(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.number)
    }
}

/// Body of a create request: a contact the service has not numbered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

impl NewContact {
    pub fn new(name: &str, number: &str) -> Self {
        NewContact {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    /// A name made only of whitespace counts as empty.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(NAME_REQ.to_string()));
        }
        Ok(())
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            number: self.number,
        }
    }
}
