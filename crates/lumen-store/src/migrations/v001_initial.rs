//! v001 -- Initial schema creation.
//!
//! Creates the single `local_storage` table. The store deliberately keeps
//! the browser local-storage shape (string key, string value) instead of
//! one table per record type: every persisted entry is a JSON document
//! written and read as a whole.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Local storage
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS local_storage (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL                 -- JSON document
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
