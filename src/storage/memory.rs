use super::*;
use std::cell::RefCell;

/// In-process storage, used by tests and benches.
pub struct MemStorage {
    data: RefCell<Vec<Contact>>,
    fail_writes: bool,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            fail_writes: false,
        }
    }

    /// Storage whose saves always fail, leaving the held list untouched.
    pub fn failing(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            fail_writes: true,
        }
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStorage for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::Storage("memory storage is read-only".to_string()));
        }
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
