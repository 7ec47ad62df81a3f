//! Protobuf wire format of the address book database.
//!
//! Field numbers follow the classic `tutorial.AddressBook` schema so files
//! written by other protobuf implementations of that schema load unchanged:
//!
//! ```text
//! message Person {
//!   string name = 1;
//!   string email = 3;
//!   repeated PhoneNumber phones = 4;
//! }
//! message PhoneNumber { string number = 1; PhoneType type = 2; }
//! message AddressBook { repeated Person people = 1; }
//! ```

use crate::domain::book::AddressBook;
use crate::domain::contact::{Person, PhoneNumber, PhoneType};
use crate::errors::AppError;
use prost::Message;

pub mod wire {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AddressBook {
        #[prost(message, repeated, tag = "1")]
        pub people: ::prost::alloc::vec::Vec<Person>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Person {
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub email: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "4")]
        pub phones: ::prost::alloc::vec::Vec<PhoneNumber>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PhoneNumber {
        #[prost(string, tag = "1")]
        pub number: ::prost::alloc::string::String,
        #[prost(enumeration = "PhoneType", tag = "2")]
        pub r#type: i32,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum PhoneType {
        Mobile = 0,
        Home = 1,
        Work = 2,
    }
}

impl From<&PhoneNumber> for wire::PhoneNumber {
    fn from(phone: &PhoneNumber) -> Self {
        wire::PhoneNumber {
            number: phone.number.clone(),
            r#type: phone.kind.code(),
        }
    }
}

impl From<wire::PhoneNumber> for PhoneNumber {
    fn from(phone: wire::PhoneNumber) -> Self {
        PhoneNumber {
            number: phone.number,
            kind: PhoneType::from_code(phone.r#type),
        }
    }
}

impl From<&Person> for wire::Person {
    fn from(person: &Person) -> Self {
        wire::Person {
            name: person.name.clone(),
            email: person.email.clone(),
            phones: person.phones.iter().map(wire::PhoneNumber::from).collect(),
        }
    }
}

impl From<wire::Person> for Person {
    fn from(person: wire::Person) -> Self {
        Person {
            name: person.name,
            email: person.email,
            phones: person.phones.into_iter().map(PhoneNumber::from).collect(),
        }
    }
}

impl From<&AddressBook> for wire::AddressBook {
    fn from(book: &AddressBook) -> Self {
        wire::AddressBook {
            people: book.people().iter().map(wire::Person::from).collect(),
        }
    }
}

impl From<wire::AddressBook> for AddressBook {
    fn from(book: wire::AddressBook) -> Self {
        AddressBook::from_people(book.people.into_iter().map(Person::from).collect())
    }
}

pub fn encode_book(book: &AddressBook) -> Result<Vec<u8>, AppError> {
    let message = wire::AddressBook::from(book);
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf)
}

pub fn decode_book(bytes: &[u8]) -> Result<AddressBook, AppError> {
    let message = wire::AddressBook::decode(bytes)?;
    Ok(AddressBook::from(message))
}
