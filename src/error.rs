use thiserror::Error;

use crate::division::Division;

/// Every failure that can stop a standings run.
///
/// None of these are recovered locally: a partial table is worse than no
/// table, so the CLI prints the message and exits non-zero.
#[derive(Debug, Error)]
pub enum LeagueError {
    /// Roster file missing, unreadable, or not matching the schema.
    #[error("config error: {0}")]
    Config(String),

    /// Network failure or non-success status from a ranking page.
    #[error("failed to fetch {division} rankings from {url}: {reason}")]
    Fetch {
        division: Division,
        url: String,
        reason: String,
    },

    /// Ranking page did not have the expected table, or a points cell was bad.
    #[error("failed to parse rankings: {0}")]
    Parse(String),

    /// A scraped name resolves to players on more than one roster slot.
    #[error("{division} player '{name}' is rostered more than once (owners: {})", .owners.join(", "))]
    AmbiguousMatch {
        division: Division,
        name: String,
        owners: Vec<String>,
    },

    /// A division roster is shorter than the number of players it scores.
    #[error("team '{owner}' has {found} {division} players, needs at least {required}")]
    InsufficientRoster {
        owner: String,
        division: Division,
        required: usize,
        found: usize,
    },

    /// The same rostered player appears on more than one row of a ranking page.
    #[error("{division} rankings list '{name}' more than once")]
    DuplicateRanking { division: Division, name: String },
}

impl LeagueError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        LeagueError::Parse(msg.into())
    }
}
