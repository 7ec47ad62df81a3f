use super::*;
use std::cell::RefCell;

/// Keeps the book for the lifetime of the process only.
pub struct MemStore {
    pub data: RefCell<AddressBook>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(AddressBook::new()),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<AddressBook, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, book: &AddressBook) -> Result<(), AppError> {
        *self.data.borrow_mut() = book.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::{Person, PhoneNumber, PhoneType};

    #[test]
    fn saved_book_is_loaded_back() -> Result<(), AppError> {
        let store = MemStore::new();
        assert!(store.load()?.is_empty());

        let mut book = AddressBook::new();
        book.append(Person::new(
            "Ada".to_string(),
            "ada@x".to_string(),
            PhoneNumber::new("555-0100".to_string(), PhoneType::Mobile),
        ));
        store.save(&book)?;

        assert_eq!(store.load()?, book);
        Ok(())
    }
}
