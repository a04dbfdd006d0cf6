pub mod attribution;
pub mod engine;
pub mod standings;

pub use attribution::{attribute, collect_points, AttributionReport, PointsTable, UnrankedPlayer};
pub use engine::{score_league, score_team, DivisionScore, TeamScore};
pub use standings::{rank_teams, standings, Standing};
