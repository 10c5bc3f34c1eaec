//! SQL schema for the Rolo SQLite store.
//!
//! Executed on every open. There is no migration step: an existing table is
//! reused as-is.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id    INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE NOT NULL,
    name  VARCHAR(40) NOT NULL,
    job   VARCHAR(50),
    email VARCHAR(40) NOT NULL
);
";
