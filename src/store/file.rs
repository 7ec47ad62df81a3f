use super::*;
use crate::store::codec::{decode_book, encode_book};
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

pub const DEFAULT_DB_PATH: &str = "addressbook.db";

/// Address book persisted as a single protobuf file, rewritten whole on save.
pub struct ProtoStore {
    pub medium: String,
    pub path: PathBuf,
}

impl ProtoStore {
    pub fn new(path: &str) -> Result<Self, AppError> {
        let path = if path.is_empty() {
            PathBuf::from(DEFAULT_DB_PATH)
        } else {
            PathBuf::from(path)
        };

        Ok(Self {
            medium: "file".to_string(),
            path,
        })
    }
}

impl ContactStore for ProtoStore {
    fn load(&self) -> Result<AddressBook, AppError> {
        if !fs::exists(&self.path)? {
            info!(path = %self.path.display(), "database not found, creating an empty one");
            self.save(&AddressBook::new())?;
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let book = decode_book(&data)?;
        info!(
            path = %self.path.display(),
            people = book.len(),
            bytes = data.len(),
            "loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<(), AppError> {
        let data = encode_book(book)?;

        create_file_parent(&self.path)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&data)?;
        file.flush()?;

        debug!(
            path = %self.path.display(),
            people = book.len(),
            bytes = data.len(),
            "saved address book"
        );
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
