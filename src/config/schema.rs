use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::division::Division;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// League configuration file.
///
/// Example YAML:
/// ```yaml
/// request_timeout_secs: 30
/// teams:
///   Ann:
///     mpo: ["Paul McBeth", "Ricky Wysocki", "Calvin Heimburg", "Gannon Buhr"]
///     fpo: ["Kristin Tattar", "Ohn Scoggins"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LeagueConfig {
    /// Ranking page overrides; each division falls back to the statmando DGPT page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourcesConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Teams in file order, keyed by owner
    #[serde(with = "ordered_teams")]
    pub teams: Vec<TeamConfig>,
}

impl LeagueConfig {
    /// Ranking page URL for a division
    pub fn source_url(&self, division: Division) -> &str {
        self.sources
            .as_ref()
            .and_then(|s| s.url(division))
            .unwrap_or_else(|| division.default_url())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fpo: Option<String>,
}

impl SourcesConfig {
    pub fn url(&self, division: Division) -> Option<&str> {
        match division {
            Division::Mpo => self.mpo.as_deref(),
            Division::Fpo => self.fpo.as_deref(),
        }
    }
}

/// One owner's drafted players
#[derive(Debug, Clone, PartialEq)]
pub struct TeamConfig {
    pub owner: String,
    pub rosters: TeamRosters,
}

/// Player names per division, in draft order
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TeamRosters {
    pub mpo: Vec<String>,
    pub fpo: Vec<String>,
}

/// Plain roster file: the owner map at the top level with no `teams` key,
/// e.g. `{"Ann": {"mpo": [...], "fpo": [...]}}`. Sources and timeout keep their
/// defaults.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct RosterMap(#[serde(with = "ordered_teams")] Vec<TeamConfig>);

impl From<RosterMap> for LeagueConfig {
    fn from(map: RosterMap) -> Self {
        LeagueConfig {
            sources: None,
            request_timeout_secs: None,
            teams: map.0,
        }
    }
}

/// Top-level keys of a config document, values skipped.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct TopLevelKeys(BTreeMap<String, IgnoredAny>);

impl TopLevelKeys {
    /// A document without a `teams` key is read as a plain roster file.
    /// An owner literally named "teams" therefore needs the full layout.
    pub(crate) fn is_roster_map(&self) -> bool {
        !self.0.contains_key("teams")
    }
}

/// `teams` is a mapping in the file but its order matters (it is the tiebreak
/// order for standings), so it is read into a Vec instead of a HashMap.
mod ordered_teams {
    use super::{TeamConfig, TeamRosters};
    use serde::de::{self, MapAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::collections::HashSet;
    use std::fmt;

    pub fn serialize<S: Serializer>(teams: &[TeamConfig], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(teams.iter().map(|t| (&t.owner, &t.rosters)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<TeamConfig>, D::Error> {
        deserializer.deserialize_map(TeamsVisitor)
    }

    struct TeamsVisitor;

    impl<'de> Visitor<'de> for TeamsVisitor {
        type Value = Vec<TeamConfig>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of owner name to {mpo, fpo} player lists")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut seen = HashSet::new();
            let mut teams = Vec::new();
            while let Some((owner, rosters)) = map.next_entry::<String, TeamRosters>()? {
                if !seen.insert(owner.clone()) {
                    return Err(de::Error::custom(format!("duplicate team owner '{}'", owner)));
                }
                teams.push(TeamConfig { owner, rosters });
            }
            Ok(teams)
        }
    }
}
