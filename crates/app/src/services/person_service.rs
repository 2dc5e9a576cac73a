//! Person service — use-cases for managing people.

use rolodex_domain::error::{NotFoundError, RolodexError};
use rolodex_domain::id::PersonId;
use rolodex_domain::person::{NewPerson, Person};

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new person; storage assigns the id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_person(&self, details: NewPerson) -> Result<Person, RolodexError> {
        let person = self.repo.create(details).await?;
        tracing::debug!(id = %person.id, "person created");
        Ok(person)
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, RolodexError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, RolodexError> {
        self.repo.get_all().await
    }

    /// Overwrite the name and email stored under `id`.
    ///
    /// The person is not looked up first: updating an unknown id succeeds and
    /// echoes the submitted values.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_person(
        &self,
        id: PersonId,
        details: NewPerson,
    ) -> Result<Person, RolodexError> {
        let person = self.repo.update(Person::new(id, details)).await?;
        tracing::debug!(%id, "person updated");
        Ok(person)
    }

    /// Delete a person by id. Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_person(&self, id: PersonId) -> Result<(), RolodexError> {
        self.repo.delete(id).await?;
        tracing::debug!(%id, "person deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPersonRepo {
        store: Mutex<BTreeMap<PersonId, Person>>,
    }

    impl PersonRepository for InMemoryPersonRepo {
        fn create(
            &self,
            person: NewPerson,
        ) -> impl Future<Output = Result<Person, RolodexError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.as_i64() + 1);
            let person = Person::new(PersonId::new(next), person);
            store.insert(person.id, person.clone());
            async { Ok(person) }
        }

        fn get_by_id(
            &self,
            id: PersonId,
        ) -> impl Future<Output = Result<Option<Person>, RolodexError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, RolodexError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Person> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            person: Person,
        ) -> impl Future<Output = Result<Person, RolodexError>> + Send {
            let mut store = self.store.lock().unwrap();
            if let Some(existing) = store.get_mut(&person.id) {
                existing.clone_from(&person);
            }
            async { Ok(person) }
        }

        fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), RolodexError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    struct FailingRepo;

    impl PersonRepository for FailingRepo {
        async fn create(&self, _person: NewPerson) -> Result<Person, RolodexError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: PersonId) -> Result<Option<Person>, RolodexError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Person>, RolodexError> {
            Err(broken())
        }
        async fn update(&self, _person: Person) -> Result<Person, RolodexError> {
            Err(broken())
        }
        async fn delete(&self, _id: PersonId) -> Result<(), RolodexError> {
            Err(broken())
        }
    }

    fn broken() -> RolodexError {
        RolodexError::Storage(Box::new(std::io::Error::other("connection refused")))
    }

    fn make_service() -> PersonService<InMemoryPersonRepo> {
        PersonService::new(InMemoryPersonRepo::default())
    }

    fn alice() -> NewPerson {
        NewPerson::new("Alice", "a@x.com")
    }

    #[tokio::test]
    async fn should_assign_id_and_echo_details_when_creating() {
        let svc = make_service();

        let created = svc.create_person(alice()).await.unwrap();
        assert!(created.id.as_i64() > 0);
        assert_eq!(created.name, "Alice");
        assert_eq!(created.email, "a@x.com");

        let fetched = svc.get_person(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_person_missing() {
        let svc = make_service();
        let result = svc.get_person(PersonId::new(999_999)).await;
        assert!(matches!(result, Err(RolodexError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_every_created_person_with_unique_ids() {
        let svc = make_service();
        svc.create_person(alice()).await.unwrap();
        svc.create_person(NewPerson::new("Bob", "b@x.com"))
            .await
            .unwrap();
        svc.create_person(NewPerson::new("Carol", "c@x.com"))
            .await
            .unwrap();

        let all = svc.list_people().await.unwrap();
        assert_eq!(all.len(), 3);
        let mut ids: Vec<_> = all.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_people() {
        let svc = make_service();
        assert!(svc.list_people().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_update_details_but_keep_id() {
        let svc = make_service();
        let created = svc.create_person(alice()).await.unwrap();

        let updated = svc
            .update_person(created.id, NewPerson::new("Alicia", "alicia@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = svc.get_person(created.id).await.unwrap();
        assert_eq!(fetched.name, "Alicia");
        assert_eq!(fetched.email, "alicia@x.com");
    }

    #[tokio::test]
    async fn should_echo_submission_when_updating_unknown_id() {
        let svc = make_service();
        let updated = svc
            .update_person(PersonId::new(404), alice())
            .await
            .unwrap();
        assert_eq!(updated.id, PersonId::new(404));
        assert_eq!(updated.name, "Alice");
        assert!(svc.list_people().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_delete_person() {
        let svc = make_service();
        let created = svc.create_person(alice()).await.unwrap();

        svc.delete_person(created.id).await.unwrap();

        let result = svc.get_person(created.id).await;
        assert!(matches!(result, Err(RolodexError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_unknown_id() {
        let svc = make_service();
        svc.delete_person(PersonId::new(12)).await.unwrap();
    }

    #[tokio::test]
    async fn should_propagate_storage_errors() {
        let svc = PersonService::new(FailingRepo);
        assert!(matches!(
            svc.create_person(alice()).await,
            Err(RolodexError::Storage(_))
        ));
        assert!(matches!(
            svc.get_person(PersonId::new(1)).await,
            Err(RolodexError::Storage(_))
        ));
        assert!(matches!(
            svc.list_people().await,
            Err(RolodexError::Storage(_))
        ));
        assert!(matches!(
            svc.delete_person(PersonId::new(1)).await,
            Err(RolodexError::Storage(_))
        ));
    }
}
