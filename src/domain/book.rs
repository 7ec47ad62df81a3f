use super::contact::Person;
use super::*;

/// The in-memory address book.
///
/// A person's contact ID is its current position in `people`. Removing an
/// entry shifts every later entry down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    people: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self { people: Vec::new() }
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Adds `person` at the end and returns its contact ID.
    pub fn append(&mut self, person: Person) -> usize {
        self.people.push(person);
        self.people.len() - 1
    }

    pub fn get(&self, id: usize) -> Result<&Person, AppError> {
        self.people
            .get(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: usize) -> Result<&mut Person, AppError> {
        self.people
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub fn update<F>(&mut self, id: usize, mutator: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Person),
    {
        let person = self.get_mut(id)?;
        mutator(person);
        Ok(())
    }

    pub fn delete(&mut self, id: usize) -> Result<Person, AppError> {
        if id < self.people.len() {
            Ok(self.people.remove(id))
        } else {
            Err(AppError::NotFound(id.to_string()))
        }
    }

    /// Every person paired with its current contact ID, in store order.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Person)> {
        self.people.iter().enumerate()
    }
}
