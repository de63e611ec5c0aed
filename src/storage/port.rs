//! CSV import and export.

use super::*;

use crate::domain::ContactStore;
use csv::{Reader, Writer};
use std::path::PathBuf;
use tracing::{info, warn};

const IMPORT_PATH: &str = "./import_export/contacts.csv";
const EXPORT_PATH: &str = "./import_export/exported.csv";

#[derive(Debug)]
pub struct ImportSummary {
    pub path: PathBuf,
    pub imported: u64,
    pub skipped: u64,
}

pub fn export_contacts_to_csv(
    contacts: &[&Contact],
    des: Option<&Path>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(EXPORT_PATH);

    if let Some(path) = des {
        file_path = path.to_path_buf();

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_none_or(|ext| ext != "csv") {
            return Err(AppError::InvalidPath(
                "Export file must be a .csv file".to_string(),
            ));
        }
    }

    create_file_parent(&file_path)?;
    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;

    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    info!(path = %file_path.display(), count = counter, "contacts exported");
    Ok((file_path, counter))
}

/// Adds every CSV row through [`ContactStore::add`], so the usual rules apply.
/// Rows that are unreadable, invalid or already present are skipped.
pub fn import_contacts_from_csv(
    store: &mut ContactStore,
    src: Option<&Path>,
) -> Result<ImportSummary, AppError> {
    let file_path = src.map_or_else(|| PathBuf::from(IMPORT_PATH), Path::to_path_buf);

    if !file_path.exists() {
        return Err(AppError::InvalidPath(format!(
            "{} does not exist",
            file_path.display()
        )));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::InvalidPath("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut imported: u64 = 0;
    let mut skipped: u64 = 0;
    for result in reader.deserialize::<Contact>() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        match store.add(&record.name, &record.phone, &record.email) {
            Ok(_) => imported += 1,
            Err(e) if e.is_client_error() => {
                warn!(name = %record.name, error = %e, "skipping CSV row");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(ImportSummary {
        path: file_path,
        imported,
        skipped,
    })
}
