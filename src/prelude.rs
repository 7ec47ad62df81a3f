pub use crate::cli::{Terminal, command, run_app, run_session};
pub use crate::domain::{
    book::AddressBook,
    contact::{self, Person, PhoneNumber, PhoneType},
};
pub use crate::errors::AppError;
pub use crate::store::{
    self, ContactStore, MemStore, ProtoStore, StorageMedium,
    codec::{decode_book, encode_book},
    parse_storage_type,
};
