use std::cmp::Ordering;

use crate::roster::Team;

/// A team's place in the final table
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub rank: usize, // 1-based
    pub owner: String,
    pub points: f64,
}

/// Order teams by total points, highest first.
///
/// The sort is stable: tied teams stay in the order they were given.
pub fn rank_teams(mut teams: Vec<Team>) -> Vec<Team> {
    teams.sort_by(|a, b| {
        b.total_points
            .partial_cmp(&a.total_points)
            .unwrap_or(Ordering::Equal)
    });
    teams
}

/// Number already-ranked teams from 1.
pub fn standings(ranked: &[Team]) -> Vec<Standing> {
    ranked
        .iter()
        .enumerate()
        .map(|(idx, team)| Standing {
            rank: idx + 1,
            owner: team.owner.clone(),
            points: team.total_points,
        })
        .collect()
}
