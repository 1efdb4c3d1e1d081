use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::prelude::{Contact, Storage};

/// Single authority over the contact sequence.
///
/// Every operation takes the one lock, and a mutation is written through to
/// `storage` before the lock is released, so the persisted file always
/// reflects the latest applied change.
///
/// Persistence is best effort: a failed save is logged and the mutation still
/// reports success, since the in-memory change has been applied.
pub struct ContactStore {
    contacts: Mutex<Vec<Contact>>,
    storage: Box<dyn Storage + Send + Sync>,
}

impl ContactStore {
    /// Builds an empty store. Call [`ContactStore::load`] to pull in persisted contacts.
    pub fn new(storage: Box<dyn Storage + Send + Sync>) -> Self {
        Self {
            contacts: Mutex::new(Vec::new()),
            storage,
        }
    }

    /// Builds a store and loads whatever the backend currently holds.
    pub fn open(storage: Box<dyn Storage + Send + Sync>) -> Self {
        let store = Self::new(storage);
        store.load();
        store
    }

    pub fn get_medium(&self) -> &str {
        self.storage.get_medium()
    }

    // A panic while holding the lock cannot leave a Vec half-built
    fn lock(&self) -> MutexGuard<'_, Vec<Contact>> {
        self.contacts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the sequence with the persisted one. Any failure leaves it untouched.
    pub fn load(&self) {
        match self.storage.load() {
            Ok(loaded) => {
                tracing::debug!(
                    medium = self.storage.get_medium(),
                    count = loaded.len(),
                    "contacts loaded"
                );
                *self.lock() = loaded;
            }
            Err(e) => {
                tracing::warn!(
                    medium = self.storage.get_medium(),
                    error = %e,
                    "could not load contacts, keeping current list"
                );
            }
        }
    }

    /// Writes the full sequence to the backend.
    pub fn save(&self) {
        let contacts = self.lock();
        self.persist(&contacts);
    }

    fn persist(&self, contacts: &[Contact]) {
        if let Err(e) = self.storage.save(contacts) {
            tracing::error!(
                medium = self.storage.get_medium(),
                error = %e,
                "failed to save contacts"
            );
        }
    }

    pub fn add(&self, name: &str, phone: &str, email: &str, address: &str) {
        let mut contacts = self.lock();
        contacts.push(Contact::new(
            name.to_string(),
            phone.to_string(),
            email.to_string(),
            address.to_string(),
        ));

        tracing::info!(name, total = contacts.len(), "contact added");
        self.persist(&contacts);
    }

    /// First contact whose name matches, ignoring case.
    pub fn find(&self, name: &str) -> Option<Contact> {
        self.lock().iter().find(|c| c.name_matches(name)).cloned()
    }

    /// Replaces every field of the first contact named `old_name`, keeping its position.
    pub fn update(
        &self,
        old_name: &str,
        new_name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> bool {
        let mut contacts = self.lock();

        let Some(index) = contacts.iter().position(|c| c.name_matches(old_name)) else {
            return false;
        };

        contacts[index] = Contact::new(
            new_name.to_string(),
            phone.to_string(),
            email.to_string(),
            address.to_string(),
        );

        tracing::info!(old_name, new_name, index, "contact updated");
        self.persist(&contacts);
        true
    }

    pub fn delete(&self, name: &str) -> bool {
        let mut contacts = self.lock();

        let Some(index) = contacts.iter().position(|c| c.name_matches(name)) else {
            return false;
        };

        contacts.remove(index);

        tracing::info!(name, index, total = contacts.len(), "contact deleted");
        self.persist(&contacts);
        true
    }

    pub fn list(&self) -> Vec<Contact> {
        self.lock().clone()
    }
}
