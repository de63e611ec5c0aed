//! Runtime settings.
//!
//! Values come from command-line flags, falling back to environment variables
//! (a `.env` file in the working directory is read first) and then to the
//! defaults below. The resolved [`Config`] is handed to whatever needs it;
//! nothing reads the environment after start-up.

use crate::domain::ContactStore;
use crate::storage::JsonStorage;
use std::path::PathBuf;

pub const DEFAULT_CONTACTS_FILE: &str = "./.instance/contacts.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the JSON document holding the contacts
    pub contacts_file: PathBuf,
}

impl Config {
    pub fn new(contacts_file: impl Into<PathBuf>) -> Self {
        Self {
            contacts_file: contacts_file.into(),
        }
    }

    /// Store for the terminal side: a missing file stays missing until a save.
    pub fn open_store(&self) -> ContactStore {
        ContactStore::open(Box::new(JsonStorage::new(&self.contacts_file, false)))
    }

    /// Store for the HTTP side: a missing file is created empty on first read.
    pub fn open_server_store(&self) -> ContactStore {
        ContactStore::open(Box::new(JsonStorage::new(&self.contacts_file, true)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACTS_FILE)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
