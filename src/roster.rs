use std::collections::{HashMap, HashSet};

use crate::config::LeagueConfig;
use crate::division::Division;
use crate::error::LeagueError;

/// A drafted professional player and the points attributed to them this run.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Canonical name, exactly as configured
    pub name: String,
    pub points: f64,
    /// Owner of the team this player is rostered on
    pub owner: String,
}

impl Player {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0.0,
            owner: owner.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub owner: String,
    mpo: Vec<Player>,
    fpo: Vec<Player>,
    pub total_points: f64,
}

impl Team {
    /// Build a team from per-division player names, keeping their order.
    pub fn new<S: AsRef<str>>(owner: impl Into<String>, mpo: &[S], fpo: &[S]) -> Self {
        let owner = owner.into();
        let build = |names: &[S]| -> Vec<Player> {
            names
                .iter()
                .map(|n| Player::new(n.as_ref(), owner.as_str()))
                .collect()
        };
        Self {
            mpo: build(mpo),
            fpo: build(fpo),
            owner,
            total_points: 0.0,
        }
    }

    pub fn roster(&self, division: Division) -> &[Player] {
        match division {
            Division::Mpo => &self.mpo,
            Division::Fpo => &self.fpo,
        }
    }

    pub fn roster_mut(&mut self, division: Division) -> &mut Vec<Player> {
        match division {
            Division::Mpo => &mut self.mpo,
            Division::Fpo => &mut self.fpo,
        }
    }
}

/// All teams of a league, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    teams: Vec<Team>,
}

impl RosterStore {
    /// Build the store from a parsed config.
    ///
    /// Schema problems are rejected while the config is parsed; the only
    /// thing left to catch here is a duplicated owner in a hand-built config.
    pub fn load(config: &LeagueConfig) -> Result<Self, LeagueError> {
        let teams = config
            .teams
            .iter()
            .map(|t| Team::new(t.owner.as_str(), &t.rosters.mpo, &t.rosters.fpo))
            .collect();
        Self::from_teams(teams)
    }

    pub fn from_teams(teams: Vec<Team>) -> Result<Self, LeagueError> {
        let mut seen = HashSet::new();
        for team in &teams {
            if !seen.insert(team.owner.as_str()) {
                return Err(LeagueError::Config(format!(
                    "duplicate team owner '{}'",
                    team.owner
                )));
            }
        }
        Ok(Self { teams })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_mut(&mut self) -> &mut [Team] {
        &mut self.teams
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }

    pub fn team(&self, owner: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// `(player name, owner)` for every roster slot in a division
    pub fn rostered_names(&self, division: Division) -> impl Iterator<Item = (&str, &str)> {
        self.teams.iter().flat_map(move |team| {
            team.roster(division)
                .iter()
                .map(move |p| (p.name.as_str(), team.owner.as_str()))
        })
    }

    /// Check the league can be scored before any ranking page is fetched.
    /// Returns all problems at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<LeagueError>> {
        let mut errors = Vec::new();

        for division in Division::ALL {
            for team in &self.teams {
                let roster = team.roster(division);
                if roster.len() < division.top_count() {
                    errors.push(LeagueError::InsufficientRoster {
                        owner: team.owner.clone(),
                        division,
                        required: division.top_count(),
                        found: roster.len(),
                    });
                }
                for player in roster {
                    if player.name.trim().is_empty() {
                        errors.push(LeagueError::Config(format!(
                            "team '{}' has a blank {} player name",
                            team.owner, division
                        )));
                    }
                }
            }

            let mut owners_by_name: HashMap<&str, Vec<String>> = HashMap::new();
            let mut order = Vec::new();
            for (name, owner) in self.rostered_names(division) {
                let owners = owners_by_name.entry(name).or_default();
                if owners.is_empty() {
                    order.push(name);
                }
                owners.push(owner.to_string());
            }
            for name in order {
                let owners = &owners_by_name[name];
                if owners.len() > 1 {
                    errors.push(LeagueError::AmbiguousMatch {
                        division,
                        name: name.to_string(),
                        owners: owners.clone(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
