//! DDL for bootstrapping an empty database.

/// The `people` table, as deployments are expected to provision it.
pub const PEOPLE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS people (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)";
