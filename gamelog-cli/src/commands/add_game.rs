use gamelog_core::Game;
use rusqlite::Connection;

use crate::CliError;

pub(crate) fn run_add_game(conn: &Connection, name: &str, alias: &str) -> Result<Game, CliError> {
    let game = gamelog_db::insert_game(conn, name, alias)
        .map_err(|e| CliError::operation("Error inserting game", e))?;

    let alias = game.alias_or_empty();
    if alias.is_empty() {
        log::info!("Added {} as game #{}", game.name, game.id);
    } else {
        log::info!("Added {} ({}) as game #{}", game.name, alias, game.id);
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_game() {
        let conn = gamelog_db::open_memory().unwrap();
        let game = run_add_game(&conn, "Go", "go").unwrap();
        assert_eq!(game.alias.as_deref(), Some("go"));
        assert_eq!(gamelog_db::list_games(&conn).unwrap(), vec![game]);
    }

    #[test]
    fn second_add_of_same_name_fails() {
        let conn = gamelog_db::open_memory().unwrap();
        run_add_game(&conn, "Chess", "").unwrap();

        let err = run_add_game(&conn, "Chess", "").unwrap_err();
        assert!(matches!(err, CliError::ConstraintViolation { .. }));
        assert!(err.to_string().starts_with("Error inserting game: "));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(gamelog_db::list_games(&conn).unwrap().len(), 1);
    }
}
