//! Inserts and lookups for games and play sessions.

use gamelog_core::{Game, PlaySession};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[source] rusqlite::Error),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("No {entity_type} found matching '{id}'")]
    NotFound { entity_type: String, id: String },
}

impl From<rusqlite::Error> for OperationError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, msg) = &err {
            if code.code == ErrorCode::ConstraintViolation {
                return Self::ConstraintViolation(msg.clone().unwrap_or_else(|| code.to_string()));
            }
        }
        Self::Sqlite(err)
    }
}

// ── Game Operations ─────────────────────────────────────────────────────────

/// Insert a new game and return it with its assigned id.
///
/// An empty alias is stored as NULL so that only real aliases take part in
/// the uniqueness constraint. A duplicate name or alias fails with
/// [`OperationError::ConstraintViolation`] and leaves the table unchanged.
pub fn insert_game(conn: &Connection, name: &str, alias: &str) -> Result<Game, OperationError> {
    let alias = (!alias.is_empty()).then(|| alias.to_string());
    conn.execute(
        "INSERT INTO game (name, alias) VALUES (?1, ?2)",
        params![name, alias],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Inserted game {} with id {}", name, id);

    Ok(Game {
        id,
        name: name.to_string(),
        alias,
    })
}

/// Find a game id by name or alias. The lowest id wins if both could match.
pub fn find_game_id(conn: &Connection, name_or_alias: &str) -> Result<Option<i64>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT game_id FROM game WHERE name = ?1 OR alias = ?1 ORDER BY game_id LIMIT 1",
    )?;
    let id = stmt
        .query_row(params![name_or_alias], |row| row.get::<_, i64>(0))
        .optional()?;
    Ok(id)
}

/// Find a game by name or alias.
pub fn find_game(conn: &Connection, name_or_alias: &str) -> Result<Option<Game>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT game_id, name, alias FROM game
         WHERE name = ?1 OR alias = ?1
         ORDER BY game_id LIMIT 1",
    )?;
    let game = stmt
        .query_row(params![name_or_alias], |row| {
            Ok(Game {
                id: row.get(0)?,
                name: row.get(1)?,
                alias: row.get(2)?,
            })
        })
        .optional()?;
    Ok(game)
}

// ── Play Operations ─────────────────────────────────────────────────────────

/// Record a session for a game id. The timestamp is assigned by SQLite.
pub fn insert_play(conn: &Connection, game_id: i64, games: i64) -> Result<PlaySession, OperationError> {
    conn.execute(
        "INSERT INTO play (game_id, games) VALUES (?1, ?2)",
        params![game_id, games],
    )?;
    let rowid = conn.last_insert_rowid();

    let session = conn.query_row(
        "SELECT game_id, games, timestamp FROM play WHERE rowid = ?1",
        params![rowid],
        |row| {
            Ok(PlaySession {
                game_id: row.get(0)?,
                games: row.get(1)?,
                timestamp: row.get(2)?,
            })
        },
    )?;
    Ok(session)
}

/// Resolve `name_or_alias` and record a session for it.
///
/// Fails with [`OperationError::NotFound`] without writing anything when no
/// game matches.
pub fn log_play(
    conn: &Connection,
    name_or_alias: &str,
    games: i64,
) -> Result<(Game, PlaySession), OperationError> {
    let game = find_game(conn, name_or_alias)?.ok_or_else(|| OperationError::NotFound {
        entity_type: "game".to_string(),
        id: name_or_alias.to_string(),
    })?;
    let session = insert_play(conn, game.id, games)?;
    Ok((game, session))
}
