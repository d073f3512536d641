use super::*;

/// Tag carried by every request to the phonebook service.
///
/// `seq` grows with each request; `version` is the list version observed when
/// the request left. A completion is only applied while the list is still at
/// that version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    /// `y`/`yes` in any case accepts, anything else declines.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Confirmation::Accepted,
            _ => Confirmation::Declined,
        }
    }
}

/// An action held back until the user answers its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// A contact with the submitted name already exists; replace its number.
    Update {
        id: ContactId,
        /// Name as typed in the form, used for the prompt.
        entered_name: String,
        updated: Contact,
        version: u64,
    },
    Delete {
        id: ContactId,
        name: String,
        version: u64,
    },
}

impl PendingAction {
    pub fn prompt(&self) -> String {
        match self {
            PendingAction::Update { entered_name, .. } => format!(
                "{entered_name} is already added to phonebook, replace the old number with a new one?"
            ),
            PendingAction::Delete { name, .. } => format!("Delete {name}?"),
        }
    }

    pub fn id(&self) -> &ContactId {
        match self {
            PendingAction::Update { id, .. } | PendingAction::Delete { id, .. } => id,
        }
    }

    pub fn version(&self) -> u64 {
        match self {
            PendingAction::Update { version, .. } | PendingAction::Delete { version, .. } => {
                *version
            }
        }
    }
}
