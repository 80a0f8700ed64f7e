//! Read queries for the play log database.

use gamelog_core::{Game, PlaySession, ReportRow};
use rusqlite::{params, Connection};

use crate::operations::OperationError;

// ── Report ──────────────────────────────────────────────────────────────────

/// Aggregate play statistics, one row per game.
///
/// Games without sessions are included with zero plays and no games total.
/// Rows are ordered by plays, then games played, both descending; ties fall
/// back to insertion order.
pub fn play_report(conn: &Connection) -> Result<Vec<ReportRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT game.name, COALESCE(game.alias, ''), COUNT(play.game_id), SUM(play.games)
         FROM game LEFT JOIN play ON play.game_id = game.game_id
         GROUP BY game.game_id
         ORDER BY 3 DESC, 4 DESC, game.game_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ReportRow {
            name: row.get(0)?,
            alias: row.get(1)?,
            plays: row.get(2)?,
            games: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Listings ────────────────────────────────────────────────────────────────

/// List all games in insertion order.
pub fn list_games(conn: &Connection) -> Result<Vec<Game>, OperationError> {
    let mut stmt = conn.prepare("SELECT game_id, name, alias FROM game ORDER BY game_id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Game {
            id: row.get(0)?,
            name: row.get(1)?,
            alias: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All sessions recorded for a game, oldest first.
pub fn sessions_for_game(conn: &Connection, game_id: i64) -> Result<Vec<PlaySession>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT game_id, games, timestamp FROM play WHERE game_id = ?1 ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![game_id], |row| {
        Ok(PlaySession {
            game_id: row.get(0)?,
            games: row.get(1)?,
            timestamp: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
