use std::fmt;

/// DGPT ranking pools a league drafts from.
///
/// Each division has its own ranking page and its own count of players that
/// score for a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    /// Mixed/open professional division
    Mpo,
    /// Women's professional division
    Fpo,
}

impl Division {
    pub const ALL: [Division; 2] = [Division::Mpo, Division::Fpo];

    /// Number of top players per team whose points count in this division.
    pub const fn top_count(self) -> usize {
        match self {
            Division::Mpo => 4,
            Division::Fpo => 2,
        }
    }

    pub const fn default_url(self) -> &'static str {
        match self {
            Division::Mpo => "https://statmando.com/rankings/dgpt/mpo",
            Division::Fpo => "https://statmando.com/rankings/dgpt/fpo",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Division::Mpo => f.write_str("MPO"),
            Division::Fpo => f.write_str("FPO"),
        }
    }
}
