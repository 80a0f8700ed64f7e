//! SQLite persistence layer for the play log.
//!
//! Provides schema creation, inserts, and the aggregation query behind the
//! play report, backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{find_game, find_game_id, insert_game, insert_play, log_play, OperationError};
pub use queries::{list_games, play_report, sessions_for_game};
pub use schema::{open_database, open_memory, SchemaError};
