//! gamelog CLI
//!
//! Command-line interface for logging play sessions of owned games and
//! reporting play statistics.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);

    if let Err(e) = run(cli, &mut std::io::stdout().lock()) {
        log::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

/// Dispatch one command. Command output goes to `out`; messages go through
/// the logger.
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        commands::run_usage(out)?;
        return Ok(());
    };

    log::debug!("Opening database {}", cli.path.display());
    let conn = gamelog_db::open_database(&cli.path)
        .map_err(|e| CliError::store_unavailable(cli.path.display(), e))?;

    match command {
        Commands::Report => {
            commands::report::run_report(&conn, out)?;
        }
        Commands::AddGame { name, alias } => {
            let name = name.ok_or_else(|| CliError::missing_argument("add-game", "<name>"))?;
            commands::add_game::run_add_game(&conn, &name, &alias)?;
        }
        Commands::Log {
            name_or_alias,
            games,
        } => {
            let name_or_alias = name_or_alias
                .ok_or_else(|| CliError::missing_argument("log", "<name-or-alias>"))?;
            commands::log_play::run_log_play(&conn, &name_or_alias, games)?;
        }
        Commands::Other(args) => {
            commands::run_unrecognised(out, &args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_in(dir: &tempfile::TempDir, args: &[&str]) -> (Result<(), CliError>, String) {
        let path = dir.path().join("gamelog.db");
        let path = path.to_str().unwrap();
        let argv = ["gamelog", "--path", path].into_iter().chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let result = run(cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn no_command_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = run_in(&dir, &[]);
        assert!(result.is_ok());
        assert!(out.starts_with("gamelog v"));
        // Usage alone does not create the database
        assert!(!dir.path().join("gamelog.db").exists());
    }

    #[test]
    fn add_game_without_name_is_missing_argument() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _) = run_in(&dir, &["add-game"]);
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingArgument {
                command: "add-game",
                ..
            }
        ));
        assert_eq!(err.to_string(), "add-game: required argument <name>");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn log_without_game_is_missing_argument() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _) = run_in(&dir, &["log"]);
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::MissingArgument { command: "log", .. }));
        assert_eq!(err.to_string(), "log: required argument <name-or-alias>");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn unrecognised_command_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = run_in(&dir, &["rename", "x"]);
        assert!(result.is_ok());
        assert_eq!(out, "Command not recognised: rename\n");
    }

    #[test]
    fn quiet_does_not_hide_command_output() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = run_in(&dir, &["--quiet", "rename"]);
        assert!(result.is_ok());
        assert!(out.contains("Command not recognised: rename"));
    }

    #[test]
    fn add_log_and_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        run_in(&dir, &["add-game", "Chess"]).0.unwrap();
        run_in(&dir, &["add-game", "Go", "--alias", "go"]).0.unwrap();
        run_in(&dir, &["log", "Chess"]).0.unwrap();
        run_in(&dir, &["log", "Chess", "--games", "3"]).0.unwrap();

        let (result, out) = run_in(&dir, &["report"]);
        result.unwrap();
        assert!(out.contains("Chess |       |     2 |     4\n"));
        assert!(out.contains("Go    | go    |     0 |     0\n"));
    }

    #[test]
    fn unknown_game_on_log_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _) = run_in(&dir, &["log", "unknown-alias"]);
        assert!(result.is_ok());
    }

    #[test]
    fn duplicate_game_fails_the_command() {
        let dir = tempfile::tempdir().unwrap();
        run_in(&dir, &["add-game", "Chess"]).0.unwrap();
        let err = run_in(&dir, &["add-game", "Chess"]).0.unwrap_err();
        assert!(matches!(err, CliError::ConstraintViolation { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn unreachable_store_is_reported_before_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("gamelog.db");
        let cli = Cli::try_parse_from(["gamelog", "--path", path.to_str().unwrap(), "rename"])
            .unwrap();
        let mut out = Vec::new();
        let err = run(cli, &mut out).unwrap_err();
        assert!(matches!(err, CliError::StoreUnavailable { .. }));
        assert!(out.is_empty());
    }
}
