use core::fmt;
use std::sync::PoisonError;

/// Field rule a proposed contact broke. Checked in the order name, phone, email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyOrInvalidName,
    InvalidPhone,
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyOrInvalidName => write!(
                f,
                "Invalid name: Name cannot be empty and must only contain letters and spaces."
            ),
            ValidationError::InvalidPhone => write!(
                f,
                "Invalid phone number: Phone number must contain at least 10 digits."
            ),
            ValidationError::InvalidEmail => write!(f, "Invalid email address format."),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Csv(csv::Error),
    DuplicateName(String),
    InvalidPath(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Lock(String),
    Malformed(String),
    NotFound(String),
    ParseCommand(String),
    Regex(regex::Error),
    Storage(String),
    Validation(ValidationError),
}

impl AppError {
    /// Caller-side mistakes: bad field values, name clashes and bad paths.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::DuplicateName(_)
                | AppError::InvalidPath(_)
                | AppError::ParseCommand(_)
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        AppError::Lock(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::DuplicateName(name) => {
                write!(f, "A contact with the name '{}' already exists.", name)
            }
            AppError::InvalidPath(msg) => {
                write!(f, "Invalid path: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid JSON: {}", e)
            }
            AppError::Lock(e) => {
                write!(f, "Contact store is unavailable: {}", e)
            }
            AppError::Malformed(msg) => {
                write!(f, "Unexpected contacts file layout: {}", msg)
            }
            AppError::NotFound(name) => {
                write!(f, "Contact '{}' not found.", name)
            }
            AppError::ParseCommand(_) => {
                write!(f, "Invalid choice. Please enter a number between 0 and 5.")
            }
            AppError::Regex(e) => {
                write!(f, "Invalid pattern: {}", e)
            }
            AppError::Storage(msg) => {
                write!(f, "Failed to save contacts: {}", msg)
            }
            AppError::Validation(err) => {
                write!(f, "{}", err)
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn validation_messages_are_shown_verbatim() {
        let err = AppError::from(ValidationError::InvalidPhone);

        assert_eq!(
            format!("{}", err),
            "Invalid phone number: Phone number must contain at least 10 digits."
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn lookup_and_storage_errors_name_their_subject() {
        let missing = AppError::NotFound("Bob".to_string());
        let storage = AppError::Storage("disk full".to_string());

        assert_eq!(format!("{}", missing), "Contact 'Bob' not found.");
        assert_eq!(format!("{}", storage), "Failed to save contacts: disk full");
        assert!(!missing.is_client_error());
        assert!(!storage.is_client_error());
    }

    #[test]
    fn duplicate_name_is_a_client_error() {
        let err = AppError::DuplicateName("Alice".to_string());

        assert!(err.is_client_error());
        assert!(format!("{}", err).contains("'Alice' already exists"));
    }
}
