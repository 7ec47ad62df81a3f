pub mod codec;
pub mod file;
pub mod memory;
pub mod storage_port;

use crate::domain::book::AddressBook;
use crate::errors::AppError;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

pub use file::ProtoStore;
pub use memory::MemStore;

pub trait ContactStore {
    fn load(&self) -> Result<AddressBook, AppError>;

    fn save(&self, book: &AddressBook) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageMedium {
    /// Protobuf database file on disk
    File,
    /// In-memory only, nothing survives the session
    Mem,
}

pub fn parse_storage_type(
    medium: StorageMedium,
    path: &str,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMedium::File => Ok(Box::new(ProtoStore::new(path)?)),
        StorageMedium::Mem => Ok(Box::new(MemStore::new())),
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
