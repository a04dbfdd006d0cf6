pub mod client;
pub mod fetcher;
pub mod parse;
pub mod types;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::{create_client, install_crypto_provider};
pub use fetcher::fetch_division;
pub use parse::{parse_points, parse_ranking_page, ranked_players};
pub use types::{DivisionRankings, RankedPlayer, ScrapedRow};
