use crate::errors::{AppError, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const MIN_PHONE_DIGITS: usize = 10;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Builds a contact from raw input. Fields are trimmed first, then checked
    /// in the order name, phone, email; the first broken rule is returned.
    pub fn new(name: &str, phone: &str, email: &str) -> Result<Self, AppError> {
        let contact = Contact {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
        };

        if !is_valid_name(&contact.name) {
            return Err(ValidationError::EmptyOrInvalidName.into());
        }

        if !is_valid_phone(&contact.phone) {
            return Err(ValidationError::InvalidPhone.into());
        }

        if !is_valid_email(&contact.email)? {
            return Err(ValidationError::InvalidEmail.into());
        }

        Ok(contact)
    }

    /// Case-insensitive exact comparison against a (trimmed) name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Case-insensitive substring match on any of the three fields.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.name.to_lowercase().contains(&query)
            || self.phone.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }
}

pub fn is_valid_name(name: &str) -> bool {
    // Letters and whitespace only, and at least one character
    !name.is_empty() && name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

pub fn is_valid_phone(phone: &str) -> bool {
    // Separators are ignored, only the digit count matters
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

pub fn is_valid_email(email: &str) -> Result<bool, AppError> {
    let re = Regex::new(EMAIL_PATTERN)?;
    Ok(re.is_match(email))
}
