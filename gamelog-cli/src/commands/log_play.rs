use gamelog_core::PlaySession;
use gamelog_db::OperationError;
use rusqlite::Connection;

use crate::CliError;

/// Record a session for a game named by name or alias.
///
/// An unknown game is reported to the user and yields `Ok(None)`; it is not
/// treated as a failure of the command.
pub(crate) fn run_log_play(
    conn: &Connection,
    name_or_alias: &str,
    games: i64,
) -> Result<Option<PlaySession>, CliError> {
    match gamelog_db::log_play(conn, name_or_alias, games) {
        Ok((game, session)) => {
            log::info!(
                "Logged {} {} of {} at {}",
                session.games,
                if session.games == 1 { "game" } else { "games" },
                game.name,
                session.timestamp.format("%Y-%m-%d %H:%M"),
            );
            Ok(Some(session))
        }
        Err(OperationError::NotFound { id, .. }) => {
            log::warn!("No game found matching name or alias: {}", id);
            Ok(None)
        }
        Err(e) => Err(CliError::operation("Error logging play", e)),
    }
}
