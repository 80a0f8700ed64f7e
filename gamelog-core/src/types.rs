use chrono::NaiveDateTime;

/// A game the user tracks plays for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Display name, unique across all games.
    pub name: String,
    /// Optional short name that can be used instead of `name` for lookups.
    /// Unique when present; an empty alias is stored as `None`.
    pub alias: Option<String>,
}

impl Game {
    /// The alias as shown in reports (empty when the game has none).
    pub fn alias_or_empty(&self) -> &str {
        self.alias.as_deref().unwrap_or("")
    }
}

/// One recorded play event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySession {
    pub game_id: i64,
    /// Number of games played in this session. Always at least 1.
    pub games: i64,
    /// Set by the store when the session is inserted (UTC).
    pub timestamp: NaiveDateTime,
}

/// Aggregated statistics for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub alias: String,
    /// Number of sessions logged for the game.
    pub plays: i64,
    /// Sum of the session counts. `None` when the game has never been played.
    pub games: Option<i64>,
}

impl ReportRow {
    /// Games played, treating "never played" as zero.
    pub fn games_or_zero(&self) -> i64 {
        self.games.unwrap_or(0)
    }
}
