use std::cmp::Ordering;

use crate::division::Division;
use crate::error::LeagueError;
use crate::roster::{Player, Team};

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionScore {
    pub division: Division,
    pub counted: Vec<Player>, // Top players, best first
    pub benched: Vec<Player>, // Everyone else, best first
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamScore {
    pub owner: String,
    pub total: f64,
    pub divisions: Vec<DivisionScore>,
}

impl TeamScore {
    pub fn division(&self, division: Division) -> Option<&DivisionScore> {
        self.divisions.iter().find(|d| d.division == division)
    }
}

/// Points descending; `sort_by` is stable so equal points keep roster order.
fn by_points_desc(a: &Player, b: &Player) -> Ordering {
    b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal)
}

/// Fail unless every division roster has enough players to score.
fn check_roster_sizes(team: &Team) -> Result<(), LeagueError> {
    for division in Division::ALL {
        let found = team.roster(division).len();
        if found < division.top_count() {
            return Err(LeagueError::InsufficientRoster {
                owner: team.owner.clone(),
                division,
                required: division.top_count(),
                found,
            });
        }
    }
    Ok(())
}

/// Score a team: sort each roster by points and sum the top players of each
/// division (4 MPO, 2 FPO) into `total_points`.
///
/// Roster sizes are checked for both divisions before anything is sorted or
/// summed, so a failing team is left untouched.
pub fn score_team(team: &mut Team) -> Result<TeamScore, LeagueError> {
    check_roster_sizes(team)?;

    let mut total = 0.0;
    let mut divisions = Vec::with_capacity(Division::ALL.len());
    for division in Division::ALL {
        let roster = team.roster_mut(division);
        roster.sort_by(by_points_desc);

        let (counted, benched) = roster.split_at(division.top_count());
        let points: f64 = counted.iter().map(|p| p.points).sum();
        total += points;

        divisions.push(DivisionScore {
            division,
            counted: counted.to_vec(),
            benched: benched.to_vec(),
            points,
        });
    }

    team.total_points = total;

    Ok(TeamScore {
        owner: team.owner.clone(),
        total,
        divisions,
    })
}

/// Score every team, stopping at the first team that cannot be scored.
pub fn score_league(teams: &mut [Team]) -> Result<Vec<TeamScore>, LeagueError> {
    teams.iter_mut().map(score_team).collect()
}
