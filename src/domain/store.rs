use super::*;

use tracing::{debug, warn};

/// The contact list and the storage it is persisted to.
///
/// Names are unique ignoring case. Each successful mutation rewrites the whole
/// list; when that write fails the mutation is undone so memory and storage
/// keep agreeing.
pub struct ContactStore {
    contacts: Vec<Contact>,
    storage: Box<dyn ContactStorage>,
}

impl ContactStore {
    /// Opens the store and loads whatever the storage holds. Unreadable or
    /// oddly shaped data yields an empty list rather than an error.
    pub fn open(storage: Box<dyn ContactStorage>) -> Self {
        let mut store = Self {
            contacts: Vec::new(),
            storage,
        };
        store.reload();
        store
    }

    /// Replaces the in-memory list with a fresh read of the storage.
    pub fn reload(&mut self) {
        self.contacts = match self.storage.load() {
            Ok(contacts) => contacts,
            Err(e) => {
                warn!(medium = self.storage.medium(), error = %e, "could not read contacts; starting empty");
                Vec::new()
            }
        };
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.contacts)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn validate(name: &str, phone: &str, email: &str) -> Result<Contact, AppError> {
        Contact::new(name, phone, email)
    }

    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<Contact, AppError> {
        let contact = Contact::new(name, phone, email)?;

        if self.position(&contact.name).is_some() {
            return Err(AppError::DuplicateName(contact.name));
        }

        self.contacts.push(contact.clone());
        if let Err(e) = self.save() {
            self.contacts.pop();
            return Err(e);
        }

        debug!(name = %contact.name, total = self.contacts.len(), "contact added");
        Ok(contact)
    }

    pub fn find(&self, name: &str) -> Result<&Contact, AppError> {
        self.position(name)
            .map(|idx| &self.contacts[idx])
            .ok_or_else(|| AppError::NotFound(name.trim().to_string()))
    }

    pub fn update(
        &mut self,
        current_name: &str,
        new_name: &str,
        new_phone: &str,
        new_email: &str,
    ) -> Result<Contact, AppError> {
        let idx = self
            .position(current_name)
            .ok_or_else(|| AppError::NotFound(current_name.trim().to_string()))?;

        let updated = Contact::new(new_name, new_phone, new_email)?;

        let taken = self
            .contacts
            .iter()
            .enumerate()
            .any(|(other, c)| other != idx && c.has_name(&updated.name));
        if taken {
            return Err(AppError::DuplicateName(updated.name));
        }

        let previous = std::mem::replace(&mut self.contacts[idx], updated.clone());
        if let Err(e) = self.save() {
            self.contacts[idx] = previous;
            return Err(e);
        }

        debug!(from = %previous.name, to = %updated.name, "contact updated");
        Ok(updated)
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        let idx = self
            .position(name)
            .ok_or_else(|| AppError::NotFound(name.trim().to_string()))?;

        let removed = self.contacts.remove(idx);
        if let Err(e) = self.save() {
            self.contacts.insert(idx, removed);
            return Err(e);
        }

        debug!(name = %removed.name, total = self.contacts.len(), "contact deleted");
        Ok(removed)
    }

    /// Linear substring scan over name, phone and email, in stored order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.matches(query)).collect()
    }

    pub fn list(&self, sorted_by_name: bool) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.contacts.iter().collect();

        if sorted_by_name {
            // sort_by_key is stable, so equal names keep their stored order
            contacts.sort_by_key(|c| c.name.to_lowercase());
        }
        contacts
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.has_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::storage::{JsonStorage, MemStorage};
    use std::fs;
    use tempfile::tempdir;

    fn contact(name: &str, phone: &str, email: &str) -> Contact {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    fn store_with(contacts: Vec<Contact>) -> ContactStore {
        ContactStore::open(Box::new(MemStorage::with_contacts(contacts)))
    }

    #[test]
    fn add_to_empty_store() -> Result<(), AppError> {
        let mut store = store_with(Vec::new());

        let added = store.add("Jane Doe", "555-123-4567", "jane@example.com")?;

        assert_eq!(added, contact("Jane Doe", "555-123-4567", "jane@example.com"));
        assert_eq!(store.list(false), vec![&added]);
        Ok(())
    }

    #[test]
    fn add_rejects_duplicate_names_in_any_case() -> Result<(), AppError> {
        let mut store = store_with(Vec::new());
        store.add("Alice", "1234567890", "alice@example.com")?;

        let err = store
            .add("  aLiCe ", "0987654321", "other@example.com")
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateName(name) if name == "aLiCe"));
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn add_rejects_invalid_fields_without_change() {
        let mut store = store_with(Vec::new());

        let err = store.add("R2D2", "1234567890", "r2@example.com").unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::EmptyOrInvalidName)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn find_is_case_insensitive() -> Result<(), AppError> {
        let store = store_with(vec![contact("Bob Smith", "1234567890", "bob@x.com")]);

        assert_eq!(store.find("bob smith")?.phone, "1234567890");
        assert!(matches!(store.find("Bob"), Err(AppError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn update_with_bad_email_leaves_record_unchanged() {
        let bob = contact("Bob", "1234567890", "bob@x.com");
        let mut store = store_with(vec![bob.clone()]);

        let err = store
            .update("Bob", "Bob", "1234567890", "not-an-email")
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ValidationError::InvalidEmail)));
        assert_eq!(store.list(false), vec![&bob]);
    }

    #[test]
    fn update_cannot_take_another_contacts_name() {
        let mut store = store_with(vec![
            contact("Alice", "1234567890", "alice@x.com"),
            contact("Bob", "0987654321", "bob@x.com"),
        ]);

        let err = store
            .update("Bob", "alice", "0987654321", "bob@x.com")
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateName(_)));
        assert_eq!(store.find("Bob").map(|c| c.email.clone()).ok(), Some("bob@x.com".to_string()));
    }

    #[test]
    fn update_keeps_position_and_allows_recasing_own_name() -> Result<(), AppError> {
        let mut store = store_with(vec![
            contact("Alice", "1234567890", "alice@x.com"),
            contact("Bob", "0987654321", "bob@x.com"),
            contact("Carol", "1112223333", "carol@x.com"),
        ]);

        store.update("bob", "BOB", "555-000-1111", "bob@new.com")?;

        let names: Vec<&str> = store.list(false).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "BOB", "Carol"]);
        assert_eq!(store.find("bob")?.email, "bob@new.com");
        Ok(())
    }

    #[test]
    fn update_missing_contact_is_not_found() {
        let mut store = store_with(Vec::new());

        let err = store
            .update("Ghost", "Ghost", "1234567890", "ghost@x.com")
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(name) if name == "Ghost"));
    }

    #[test]
    fn deleting_missing_name_changes_nothing() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let mut store = ContactStore::open(Box::new(JsonStorage::new(&path, false)));
        store.add("Alice", "1234567890", "alice@x.com")?;
        let before = fs::read_to_string(&path)?;

        let err = store.delete("Nobody").unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read_to_string(&path)?, before);
        Ok(())
    }

    #[test]
    fn delete_removes_and_persists() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let mut store = ContactStore::open(Box::new(JsonStorage::new(&path, false)));
        store.add("Alice", "1234567890", "alice@x.com")?;
        store.add("Bob", "0987654321", "bob@x.com")?;

        let removed = store.delete("ALICE")?;
        assert_eq!(removed.name, "Alice");

        let reopened = ContactStore::open(Box::new(JsonStorage::new(&path, false)));
        let names: Vec<&str> = reopened.list(false).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bob"]);
        Ok(())
    }

    #[test]
    fn search_matches_any_field_in_stored_order() {
        let store = store_with(vec![
            contact("Zed", "555-123-4567", "zed@x.com"),
            contact("Amy", "1234567890", "amy@x.com"),
            contact("Bea", "0987654321", "bea@zedcorp.com"),
        ]);

        let by_phone: Vec<&str> = store.search("555").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(by_phone, vec!["Zed"]);

        let by_any: Vec<&str> = store.search("ZED").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(by_any, vec!["Zed", "Bea"]);

        assert!(store.search("zzz").is_empty());
    }

    #[test]
    fn list_sorts_by_name_ignoring_case_and_is_stable() {
        let store = store_with(vec![
            contact("bob", "1111111111", "first@x.com"),
            contact("Alice", "2222222222", "alice@x.com"),
            contact("Bob", "3333333333", "second@x.com"),
        ]);

        let unsorted: Vec<&str> = store.list(false).iter().map(|c| c.email.as_str()).collect();
        assert_eq!(unsorted, vec!["first@x.com", "alice@x.com", "second@x.com"]);

        let sorted: Vec<&str> = store.list(true).iter().map(|c| c.email.as_str()).collect();
        assert_eq!(sorted, vec!["alice@x.com", "first@x.com", "second@x.com"]);
    }

    #[test]
    fn failed_writes_roll_back_every_mutation() {
        let alice = contact("Alice", "1234567890", "alice@x.com");
        let mut store =
            ContactStore::open(Box::new(MemStorage::failing(vec![alice.clone()])));

        let added = store.add("Bob", "0987654321", "bob@x.com");
        let updated = store.update("Alice", "Alicia", "1234567890", "alice@x.com");
        let deleted = store.delete("Alice");

        assert!(matches!(added, Err(AppError::Storage(_))));
        assert!(matches!(updated, Err(AppError::Storage(_))));
        assert!(matches!(deleted, Err(AppError::Storage(_))));
        assert_eq!(store.list(false), vec![&alice]);
    }

    #[test]
    fn invalid_json_file_opens_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{ this is not json")?;

        let store = ContactStore::open(Box::new(JsonStorage::new(&path, false)));

        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn save_then_reload_round_trips() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let mut store = ContactStore::open(Box::new(JsonStorage::new(&path, false)));
        store.add("Jane Doe", "555-123-4567", "jane@example.com")?;
        store.add("Zoë", "+44 7700 900123", "zoe@example.com")?;
        let saved: Vec<Contact> = store.list(false).into_iter().cloned().collect();

        store.reload();

        let loaded: Vec<Contact> = store.list(false).into_iter().cloned().collect();
        assert_eq!(loaded, saved);
        Ok(())
    }
}
