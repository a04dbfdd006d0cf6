use std::collections::HashMap;

use crate::division::Division;
use crate::error::LeagueError;

/// Appended by the ranking pages to players who have qualified for the
/// championship. Not part of the name.
pub const QUALIFIER_MARKER: char = '*';

/// Normalize a scraped display name for comparison with roster names.
///
/// Trims surrounding whitespace, then strips exactly one trailing
/// [`QUALIFIER_MARKER`] if present.
pub fn normalize_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix(QUALIFIER_MARKER).unwrap_or(trimmed)
}

/// Resolves scraped display names to canonical rostered names for one division.
///
/// Matching is exact after [`normalize_name`]; there is no partial or
/// substring matching, so "Will Smith" never claims "Will Smithson".
#[derive(Debug, Clone)]
pub struct NameMatcher {
    division: Division,
    owners_by_name: HashMap<String, Vec<String>>,
}

impl NameMatcher {
    /// Index `(canonical name, owner)` roster entries.
    pub fn new<'a, I>(division: Division, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut owners_by_name: HashMap<String, Vec<String>> = HashMap::new();
        for (name, owner) in entries {
            owners_by_name
                .entry(name.to_string())
                .or_default()
                .push(owner.to_string());
        }
        Self {
            division,
            owners_by_name,
        }
    }

    pub fn division(&self) -> Division {
        self.division
    }

    /// Resolve a display name to its canonical rostered name.
    ///
    /// `Ok(None)` means the player is not on any roster. A name held by more
    /// than one roster slot fails with [`LeagueError::AmbiguousMatch`].
    pub fn resolve(&self, display_name: &str) -> Result<Option<&str>, LeagueError> {
        let name = normalize_name(display_name);
        match self.owners_by_name.get_key_value(name) {
            None => Ok(None),
            Some((canonical, owners)) if owners.len() == 1 => Ok(Some(canonical.as_str())),
            Some((canonical, owners)) => Err(LeagueError::AmbiguousMatch {
                division: self.division,
                name: canonical.clone(),
                owners: owners.clone(),
            }),
        }
    }
}
