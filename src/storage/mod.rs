pub mod json;
pub mod memory;
pub mod port;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

/// Backing medium for the contact list. Every save replaces the whole list.
pub trait ContactStorage: Send {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
