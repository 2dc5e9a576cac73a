//! `SQLite` connection pool setup and liveness probe.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;
use crate::schema::PEOPLE_TABLE;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:rolodex.db?mode=rwc` or `sqlite::memory:`).
    pub database_url: String,
    /// Create the `people` table when it does not exist yet.
    pub create_schema: bool,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Opens the connection pool, checks that the database answers, and
    /// bootstraps the schema when asked to.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database is unreachable or the schema
    /// cannot be created.
    pub async fn build(self) -> Result<Database, StorageError> {
        let db = Database::connect(&self.database_url).await?;
        db.ping().await?;
        if self.create_schema {
            db.create_schema().await?;
        }
        Ok(db)
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?;

        // An in-memory database lives only as long as its connections, so keep
        // exactly one open for the pool's whole lifetime.
        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Round-trip a trivial statement to prove the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the statement fails.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_schema(&self) -> Result<(), StorageError> {
        sqlx::query(PEOPLE_TABLE).execute(&self.pool).await?;
        tracing::info!("people table ensured");
        Ok(())
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection, waiting for in-flight statements to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
