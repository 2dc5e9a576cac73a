//! DDL for bootstrapping an empty database.
//!
//! Production deployments are expected to provision the table themselves;
//! this is only applied when [`Config::create_schema`](crate::Config) is set.

/// The `people` table: a storage-assigned integer key plus contact details.
pub const PEOPLE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)";
