use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request to the phonebook service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed phonebook data: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("A confirmation is still waiting for an answer")]
    ConfirmationPending,

    #[error("Nothing is waiting for confirmation")]
    NoPendingConfirmation,

    #[error("Discarded a response issued against an outdated phonebook")]
    StaleResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact Not found");
    }

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("Name must not be empty".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: Name must not be empty".to_string()
        );
    }

    #[test]
    fn confirm_serde_error_converts() {
        let parse_err = serde_json::from_str::<u32>("abc").unwrap_err();
        let err: AppError = parse_err.into();

        assert!(format!("{}", err).contains("Malformed phonebook data: "));
    }
}
