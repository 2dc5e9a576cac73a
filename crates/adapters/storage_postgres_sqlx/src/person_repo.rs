//! `PostgreSQL` implementation of [`PersonRepository`].

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use rolodex_app::ports::PersonRepository;
use rolodex_domain::error::RolodexError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::{NewPerson, Person};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let email: String = row.try_get("email")?;

        Ok(Self(Person {
            id: PersonId::new(id),
            name,
            email,
        }))
    }
}

// `serial` keys are `int4`; widen them so they decode as `i64`.
const INSERT: &str = "INSERT INTO people (name, email) VALUES ($1, $2) RETURNING id::BIGINT";
const SELECT_BY_ID: &str = "SELECT id::BIGINT AS id, name, email FROM people WHERE id = $1";
const SELECT_ALL: &str = "SELECT id::BIGINT AS id, name, email FROM people";
const UPDATE: &str = "UPDATE people SET name = $1, email = $2 WHERE id = $3";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = $1";

/// `PostgreSQL`-backed person repository.
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for PgPersonRepository {
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, RolodexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = sqlx::query_scalar::<_, i64>(INSERT)
                .bind(&person.name)
                .bind(&person.email)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Person::new(PersonId::new(id), person))
        }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, RolodexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, RolodexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, person: Person) -> impl Future<Output = Result<Person, RolodexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&person.name)
                .bind(&person.email)
                .bind(person.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::debug!(id = %person.id, "update matched no row");
            }
            Ok(person)
        }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), RolodexError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
