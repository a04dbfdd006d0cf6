use std::collections::HashMap;
use std::time::Instant;

use crate::config::LeagueConfig;
use crate::division::Division;
use crate::error::LeagueError;
use crate::rankings::{fetch_division, DivisionRankings, RankedPlayer};
use crate::roster::{RosterStore, Team};
use crate::scoring::{attribute, rank_teams, score_league, AttributionReport, TeamScore};

/// Result of a full standings run
#[derive(Debug, Clone)]
pub struct LeagueStandings {
    /// Teams in rank order, rosters sorted by points
    pub teams: Vec<Team>,
    /// Score breakdowns, same order as `teams`
    pub scores: Vec<TeamScore>,
    pub report: AttributionReport,
}

async fn fetch_logged(
    client: &reqwest::Client,
    division: Division,
    url: &str,
    verbose: bool,
) -> Result<Vec<RankedPlayer>, LeagueError> {
    let start = Instant::now();
    if verbose {
        eprintln!("Fetching {} rankings: {}", division, url);
    }
    let players = fetch_division(client, division, url).await?;
    if verbose {
        eprintln!(
            "  Found {} {} rows in {:?}",
            players.len(),
            division,
            start.elapsed()
        );
    }
    Ok(players)
}

/// Fetch both divisions' ranking pages concurrently.
///
/// Returns only once both pages are in; the first failure aborts the other
/// fetch and is returned as-is.
pub async fn fetch_rankings(
    client: &reqwest::Client,
    config: &LeagueConfig,
    verbose: bool,
) -> Result<DivisionRankings, LeagueError> {
    let (mpo, fpo) = tokio::try_join!(
        fetch_logged(client, Division::Mpo, config.source_url(Division::Mpo), verbose),
        fetch_logged(client, Division::Fpo, config.source_url(Division::Fpo), verbose),
    )?;
    Ok(DivisionRankings { mpo, fpo })
}

/// Attribute points, score every team and rank them.
///
/// Runs single-threaded on fully fetched rankings.
pub fn compute_standings(
    mut store: RosterStore,
    rankings: &DivisionRankings,
) -> Result<LeagueStandings, LeagueError> {
    let report = attribute(&mut store, rankings)?;

    let mut teams = store.into_teams();
    let scores = score_league(&mut teams)?;

    let ranked = rank_teams(teams);
    let mut by_owner: HashMap<String, TeamScore> = scores
        .into_iter()
        .map(|s| (s.owner.clone(), s))
        .collect();
    let ordered_scores = ranked
        .iter()
        .filter_map(|team| by_owner.remove(&team.owner))
        .collect();

    Ok(LeagueStandings {
        teams: ranked,
        scores: ordered_scores,
        report,
    })
}

/// Fetch rankings for both divisions and compute the league standings.
pub async fn fetch_and_score_league(
    client: &reqwest::Client,
    config: &LeagueConfig,
    store: RosterStore,
    verbose: bool,
) -> Result<LeagueStandings, LeagueError> {
    let rankings = fetch_rankings(client, config, verbose).await?;
    let standings = compute_standings(store, &rankings)?;

    if verbose {
        eprintln!(
            "Matched {} MPO and {} FPO rostered players",
            standings.report.matched_in(Division::Mpo),
            standings.report.matched_in(Division::Fpo)
        );
    }

    Ok(standings)
}
