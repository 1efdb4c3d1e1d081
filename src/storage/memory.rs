use super::*;

use std::sync::{Mutex, PoisonError};

/// Keeps the last saved sequence in memory. Nothing survives the process.
#[derive(Default)]
pub struct MemStorage {
    pub data: Mutex<Vec<Contact>>,
}

impl MemStorage {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            data: Mutex::new(contacts),
        }
    }
}

impl Storage for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self
            .data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
