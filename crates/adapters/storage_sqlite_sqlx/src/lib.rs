//! # rolodex-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `rolodex-app::ports::storage`
//! - Manage the connection pool lifecycle (open, liveness probe, close)
//! - Optionally bootstrap the `people` table on an empty database
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `rolodex-app` (for port traits) and `rolodex-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod person_repo;
pub mod pool;
pub mod schema;

pub use error::StorageError;
pub use person_repo::SqlitePersonRepository;
pub use pool::{Config, Database};
