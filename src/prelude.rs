pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    store::ContactStore,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, Storage, StorageMediums, memory::MemStorage, parse_storage_type, stores::JsonStorage,
};
pub use crate::web;
