use std::collections::HashMap;

use crate::division::Division;
use crate::error::LeagueError;
use crate::matching::NameMatcher;
use crate::rankings::{DivisionRankings, RankedPlayer};
use crate::roster::RosterStore;

/// Canonical rostered name -> points, for one division
pub type PointsTable = HashMap<String, f64>;

/// Rostered player with no row on their division's ranking page
#[derive(Debug, Clone, PartialEq)]
pub struct UnrankedPlayer {
    pub division: Division,
    pub name: String,
    pub owner: String,
}

/// Summary of one attribution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributionReport {
    /// Number of ranking rows matched to a roster slot, per division (MPO, FPO)
    pub matched: [usize; 2],
    /// Rostered players left at zero points
    pub unranked: Vec<UnrankedPlayer>,
}

impl AttributionReport {
    pub fn matched_in(&self, division: Division) -> usize {
        self.matched[division as usize]
    }
}

/// Build a division's points table from its ranking rows.
///
/// Rows for players not on any roster are skipped. A second row resolving to
/// an already-matched player is a data anomaly and fails instead of
/// overwriting the first.
pub fn collect_points(
    matcher: &NameMatcher,
    rows: &[RankedPlayer],
) -> Result<PointsTable, LeagueError> {
    let mut table = PointsTable::new();
    for row in rows {
        let Some(name) = matcher.resolve(&row.display_name)? else {
            continue;
        };
        if table.insert(name.to_string(), row.points).is_some() {
            return Err(LeagueError::DuplicateRanking {
                division: matcher.division(),
                name: name.to_string(),
            });
        }
    }
    Ok(table)
}

/// Write each division's points into the rostered players.
///
/// Runs only after both divisions have been fetched; every player's points
/// are set exactly once, to 0 when they have no ranking row.
pub fn attribute(
    store: &mut RosterStore,
    rankings: &DivisionRankings,
) -> Result<AttributionReport, LeagueError> {
    let mut tables = Vec::with_capacity(Division::ALL.len());
    for division in Division::ALL {
        let matcher = NameMatcher::new(division, store.rostered_names(division));
        tables.push((division, collect_points(&matcher, rankings.get(division))?));
    }

    let mut report = AttributionReport::default();
    for (division, table) in &tables {
        report.matched[*division as usize] = table.len();
        for team in store.teams_mut() {
            for player in team.roster_mut(*division).iter_mut() {
                match table.get(&player.name) {
                    Some(points) => player.points = *points,
                    None => {
                        player.points = 0.0;
                        report.unranked.push(UnrankedPlayer {
                            division: *division,
                            name: player.name.clone(),
                            owner: player.owner.clone(),
                        });
                    }
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Team;

    fn store(teams: Vec<Team>) -> RosterStore {
        RosterStore::from_teams(teams).unwrap()
    }

    fn points_of(store: &RosterStore, owner: &str, division: Division) -> Vec<f64> {
        store
            .team(owner)
            .unwrap()
            .roster(division)
            .iter()
            .map(|p| p.points)
            .collect()
    }

    #[test]
    fn test_collect_points_skips_unrostered() {
        let matcher = NameMatcher::new(Division::Mpo, [("John Doe", "Ann")]);
        let rows = vec![
            RankedPlayer::new("John Doe*", 42.5),
            RankedPlayer::new("Jane Roe", 99.0),
        ];
        let table = collect_points(&matcher, &rows).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["John Doe"], 42.5);
    }

    #[test]
    fn test_collect_points_duplicate_row() {
        let matcher = NameMatcher::new(Division::Fpo, [("John Doe", "Ann")]);
        let rows = vec![
            RankedPlayer::new("John Doe*", 10.0),
            RankedPlayer::new("John Doe", 3.0),
        ];
        match collect_points(&matcher, &rows) {
            Err(LeagueError::DuplicateRanking { division, name }) => {
                assert_eq!(division, Division::Fpo);
                assert_eq!(name, "John Doe");
            }
            other => panic!("expected DuplicateRanking, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_unrostered_rows_ignored() {
        let matcher = NameMatcher::new(Division::Mpo, [("John Doe", "Ann")]);
        let rows = vec![RankedPlayer::new("Jane Roe", 1.0), RankedPlayer::new("Jane Roe", 2.0)];
        assert!(collect_points(&matcher, &rows).unwrap().is_empty());
    }

    #[test]
    fn test_attribute_sets_points_per_division() {
        let mut store = store(vec![
            Team::new("Ann", &["P1", "P2"], &["F1"]),
            Team::new("Ben", &["P3"], &["F2", "F3"]),
        ]);
        let rankings = DivisionRankings {
            mpo: vec![
                RankedPlayer::new("P3*", 30.0),
                RankedPlayer::new("P1", 10.0),
                RankedPlayer::new("Somebody Else", 500.0),
            ],
            fpo: vec![RankedPlayer::new("F2", 5.5), RankedPlayer::new("F1*", 7.0)],
        };

        let report = attribute(&mut store, &rankings).unwrap();

        assert_eq!(points_of(&store, "Ann", Division::Mpo), vec![10.0, 0.0]);
        assert_eq!(points_of(&store, "Ann", Division::Fpo), vec![7.0]);
        assert_eq!(points_of(&store, "Ben", Division::Mpo), vec![30.0]);
        assert_eq!(points_of(&store, "Ben", Division::Fpo), vec![5.5, 0.0]);

        assert_eq!(report.matched_in(Division::Mpo), 2);
        assert_eq!(report.matched_in(Division::Fpo), 2);
        assert_eq!(
            report.unranked,
            vec![
                UnrankedPlayer { division: Division::Mpo, name: "P2".into(), owner: "Ann".into() },
                UnrankedPlayer { division: Division::Fpo, name: "F3".into(), owner: "Ben".into() },
            ]
        );
    }

    #[test]
    fn test_same_name_in_both_divisions_is_independent() {
        let mut store = store(vec![Team::new("Ann", &["Sam Lee"], &["Sam Lee"])]);
        let rankings = DivisionRankings {
            mpo: vec![RankedPlayer::new("Sam Lee", 1.0)],
            fpo: vec![RankedPlayer::new("Sam Lee", 2.0)],
        };
        attribute(&mut store, &rankings).unwrap();
        assert_eq!(points_of(&store, "Ann", Division::Mpo), vec![1.0]);
        assert_eq!(points_of(&store, "Ann", Division::Fpo), vec![2.0]);
    }

    #[test]
    fn test_attribute_ambiguous_owner() {
        let mut store = store(vec![
            Team::new("Ann", &["John Doe"], &["F1"]),
            Team::new("Ben", &["John Doe"], &["F2"]),
        ]);
        let rankings = DivisionRankings {
            mpo: vec![RankedPlayer::new("John Doe*", 12.0)],
            fpo: vec![],
        };
        let err = attribute(&mut store, &rankings).unwrap_err();
        assert!(matches!(err, LeagueError::AmbiguousMatch { division: Division::Mpo, .. }));
        // Nothing is written when attribution fails
        assert_eq!(points_of(&store, "Ann", Division::Mpo), vec![0.0]);
    }
}
