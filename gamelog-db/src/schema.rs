//! SQLite schema creation.

use std::path::Path;

use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Relations the schema consists of, in creation order.
pub const TABLE_NAMES: [&str; 2] = ["game", "play"];

const TABLES: [(&str, &str); 2] = [("game", GAME_SQL), ("play", PLAY_SQL)];

/// Create any missing tables.
///
/// Each table is checked for before it is created, so this is safe to call
/// on an existing database and never touches existing rows.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    for (table, sql) in TABLES {
        if table_exists(conn, table)? {
            continue;
        }
        log::debug!("Creating table '{}'", table);
        conn.execute_batch(sql)?;
    }
    conn.execute_batch(INDEX_SQL)?;
    Ok(())
}

/// Open or create a play log database at the given path.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Whether a table with the given name exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
        params![name],
        |row| row.get(0),
    )?;
    Ok(exists)
}

// AUTOINCREMENT keeps ids from being handed out again after a delete.
const GAME_SQL: &str = r#"
CREATE TABLE game (
    game_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name NVARCHAR(255) NOT NULL UNIQUE,
    alias NVARCHAR(20) UNIQUE
);
"#;

const PLAY_SQL: &str = r#"
CREATE TABLE play (
    game_id INTEGER NOT NULL REFERENCES game(game_id) ON DELETE CASCADE,
    games INTEGER NOT NULL DEFAULT 1 CHECK (games > 0),
    timestamp TEXT NOT NULL DEFAULT current_timestamp
);
"#;

const INDEX_SQL: &str = r#"
CREATE INDEX IF NOT EXISTS idx_play_game ON play(game_id);
"#;
