use super::parse::{parse_ranking_page, ranked_players};
use super::types::RankedPlayer;
use crate::division::Division;
use crate::error::LeagueError;

/// Download one division's ranking page and validate every row.
///
/// No retries: a failed or non-success response fails the run.
pub async fn fetch_division(
    client: &reqwest::Client,
    division: Division,
    url: &str,
) -> Result<Vec<RankedPlayer>, LeagueError> {
    let fetch_err = |reason: String| LeagueError::Fetch {
        division,
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                fetch_err("request timed out".to_string())
            } else {
                fetch_err(e.to_string())
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_err(format!("status code error: {}", status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| fetch_err(format!("failed to read body: {}", e)))?;

    // Html is not Send, so parsing stays out of the async state machine
    parse_division_page(division, &body)
}

fn parse_division_page(division: Division, body: &str) -> Result<Vec<RankedPlayer>, LeagueError> {
    parse_ranking_page(body)
        .and_then(ranked_players)
        .map_err(|e| match e {
            LeagueError::Parse(msg) => LeagueError::Parse(format!("{} rankings: {}", division, msg)),
            other => other,
        })
}
