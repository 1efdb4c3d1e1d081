pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONTACTS_PATH: &str = "contacts.json";

/// Durable home of the contact sequence. `ContactStore` only ever talks to this.
pub trait Storage {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::ParseStorage(str.to_string())),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &str,
) -> Box<dyn Storage + Send + Sync> {
    match medium {
        StorageMediums::Json => Box::new(stores::JsonStorage::new(path)),
        StorageMediums::Mem => Box::new(memory::MemStorage::default()),
    }
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
