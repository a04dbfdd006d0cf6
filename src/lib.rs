pub mod config;
pub mod division;
pub mod error;
pub mod fetch;
pub mod matching;
pub mod output;
pub mod rankings;
pub mod roster;
pub mod scoring;

pub use division::Division;
pub use error::LeagueError;
