//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Database file used when `--path` is not given.
pub(crate) const DEFAULT_DB_PATH: &str = "gamelog.db";

#[derive(Debug, Parser)]
#[command(name = "gamelog", version)]
#[command(about = "Track plays of the games you own", long_about = None)]
#[command(allow_external_subcommands = true)]
pub(crate) struct Cli {
    /// Database file to use (created if it does not exist)
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    pub path: PathBuf,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Print play statistics for every game
    Report,

    /// Add a game to the log
    AddGame {
        /// Name of the game (must be unique)
        name: Option<String>,

        /// Short alternate name accepted by `log` (must be unique if set)
        #[arg(long, default_value = "")]
        alias: String,
    },

    /// Record a play session
    Log {
        /// Name or alias of the game played
        name_or_alias: Option<String>,

        /// Number of games played in the session
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        games: i64,
    },

    /// Anything else; reported as unrecognised
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gamelog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_has_no_command() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn path_is_global() {
        let before = parse(&["--path", "plays.db", "report"]);
        let after = parse(&["report", "--path", "plays.db"]);
        assert_eq!(before.path, PathBuf::from("plays.db"));
        assert_eq!(after.path, PathBuf::from("plays.db"));
        assert!(matches!(after.command, Some(Commands::Report)));
    }

    #[test]
    fn add_game_with_alias() {
        let cli = parse(&["add-game", "Go", "--alias", "go"]);
        match cli.command {
            Some(Commands::AddGame { name, alias }) => {
                assert_eq!(name.as_deref(), Some("Go"));
                assert_eq!(alias, "go");
            }
            _ => panic!("expected add-game"),
        }
    }

    #[test]
    fn add_game_alias_defaults_to_empty() {
        let cli = parse(&["add-game", "Chess"]);
        assert!(matches!(
            cli.command,
            Some(Commands::AddGame { alias, .. }) if alias.is_empty()
        ));
    }

    #[test]
    fn add_game_name_may_be_missing() {
        let cli = parse(&["add-game"]);
        assert!(matches!(cli.command, Some(Commands::AddGame { name: None, .. })));
    }

    #[test]
    fn log_games_defaults_to_one() {
        let cli = parse(&["log", "go"]);
        match cli.command {
            Some(Commands::Log { name_or_alias, games }) => {
                assert_eq!(name_or_alias.as_deref(), Some("go"));
                assert_eq!(games, 1);
            }
            _ => panic!("expected log"),
        }
    }

    #[test]
    fn log_games_must_be_positive() {
        assert!(parse(&["log", "go", "--games", "3"]).command.is_some());
        let args = ["gamelog", "log", "go", "--games", "0"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn unknown_command_is_captured() {
        let cli = parse(&["rename", "Go"]);
        match cli.command {
            Some(Commands::Other(args)) => assert_eq!(args, ["rename", "Go"]),
            _ => panic!("expected external command"),
        }
    }

    #[test]
    fn verbose_and_quiet_flags() {
        let cli = parse(&["-v", "report"]);
        assert!(cli.verbose);
        let cli = parse(&["report", "--quiet"]);
        assert!(cli.quiet);
    }
}
