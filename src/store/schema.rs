//! Relational schema.
//!
//! Properties own their spaces: `spaces.property_id` references
//! `properties.id` and is removed with it. Type columns are plain TEXT; the
//! closed sets are enforced at the write boundary.

use rusqlite::Connection;

use super::errors::{StoreError, StoreResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS properties (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    address     TEXT NOT NULL,
    type        TEXT NOT NULL,
    price       REAL NOT NULL,
    description TEXT
);
CREATE INDEX IF NOT EXISTS idx_properties_type ON properties(type);
CREATE INDEX IF NOT EXISTS idx_properties_price ON properties(price);

CREATE TABLE IF NOT EXISTS spaces (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    type        TEXT NOT NULL,
    size        REAL NOT NULL,
    description TEXT
);
CREATE INDEX IF NOT EXISTS idx_spaces_type ON spaces(type);
CREATE INDEX IF NOT EXISTS idx_spaces_size ON spaces(size);
CREATE INDEX IF NOT EXISTS idx_spaces_property_id ON spaces(property_id);
";

/// Per-connection settings. SQLite leaves foreign keys off unless asked.
pub fn configure(conn: &Connection) -> StoreResult<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(StoreError::Schema)
}

/// Create tables and indexes if they do not exist. Idempotent.
pub fn apply(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA).map_err(StoreError::Schema)
}
