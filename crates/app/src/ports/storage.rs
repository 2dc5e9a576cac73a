//! Storage port — repository trait for persisting people.

use std::future::Future;

use rolodex_domain::error::RolodexError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::{NewPerson, Person};

/// Repository for persisting and querying [`Person`]s.
///
/// Every method maps to exactly one storage statement. Concurrent callers
/// get no ordering guarantee between writes to the same id.
pub trait PersonRepository {
    /// Store a new person and return it with its storage-assigned id.
    fn create(&self, person: NewPerson)
    -> impl Future<Output = Result<Person, RolodexError>> + Send;

    /// Get a person by id.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, RolodexError>> + Send;

    /// Get every person, in whatever order storage yields them.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, RolodexError>> + Send;

    /// Overwrite name and email of the person with `person.id`.
    ///
    /// Succeeds without effect when no such person exists.
    fn update(&self, person: Person) -> impl Future<Output = Result<Person, RolodexError>> + Send;

    /// Delete a person by id. Succeeds without effect when no such person exists.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), RolodexError>> + Send;
}
