use super::*;

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const INDENT: &[u8] = b"    ";

/// Contacts kept as a JSON document on disk.
///
/// Reads accept either a bare array of contacts or an object carrying a
/// `contacts` array. Writes always produce a bare array, indented with four
/// spaces, with non-ASCII text left as is.
pub struct JsonStorage {
    pub path: PathBuf,
    /// Write an empty `[]` document when a load finds no file.
    pub create_if_missing: bool,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>, create_if_missing: bool) -> Self {
        Self {
            path: path.into(),
            create_if_missing,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "contacts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        contacts.serialize(&mut ser)?;
        buf.push(b'\n');

        // Write beside the target, then swap it in, so a failed write never
        // truncates the previous list.
        let tmp = self.temp_path();
        let written = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp)
            .and_then(|mut file| {
                file.write_all(&buf)?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl ContactStorage for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            if self.create_if_missing {
                info!(path = %self.path.display(), "contacts file not found; creating empty []");
                if let Err(e) = self.save(&[]) {
                    warn!(error = %e, "could not create contacts file");
                }
            }
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_str(&data)?;
        let contacts = parse_contacts(value)?;
        debug!(path = %self.path.display(), count = contacts.len(), "contacts loaded");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        self.write(contacts)
            .map_err(|e| AppError::Storage(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), count = contacts.len(), "contacts saved");
        Ok(())
    }

    fn medium(&self) -> &str {
        "json"
    }
}

/// Accepts the current bare-array layout and the older `{"contacts": [...]}` one.
pub fn parse_contacts(value: Value) -> Result<Vec<Contact>, AppError> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) => match map.remove("contacts") {
            Some(list @ Value::Array(_)) => Ok(serde_json::from_value(list)?),
            _ => Err(AppError::Malformed(
                "object without a `contacts` list".to_string(),
            )),
        },
        _ => Err(AppError::Malformed(
            "expected a list of contacts".to_string(),
        )),
    }
}
