//! # rolodex-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `rolodex-app::ports::storage`
//!   against a pre-provisioned `people` table (`id serial primary key`)
//! - Manage the connection pool lifecycle (open, liveness probe, close)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `rolodex-app` (for port traits) and `rolodex-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.
//!
//! ## Tests
//! Tests that need a live server read `ROLODEX_TEST_POSTGRES_URL` and return
//! early when it is unset.

pub mod error;
pub mod person_repo;
pub mod pool;
pub mod schema;

pub use error::StorageError;
pub use person_repo::PgPersonRepository;
pub use pool::{Config, Database};
