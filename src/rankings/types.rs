use crate::division::Division;

/// One ranking table row as extracted from the page, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedRow {
    pub display_name: String,
    pub points_text: String,
}

/// A ranking row whose points parsed cleanly
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub display_name: String, // As shown on the page, qualifier marker included
    pub points: f64,
}

impl RankedPlayer {
    pub fn new(display_name: impl Into<String>, points: f64) -> Self {
        Self {
            display_name: display_name.into(),
            points,
        }
    }
}

/// Fetched rankings for both divisions, only built once both fetches finished
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DivisionRankings {
    pub mpo: Vec<RankedPlayer>,
    pub fpo: Vec<RankedPlayer>,
}

impl DivisionRankings {
    pub fn get(&self, division: Division) -> &[RankedPlayer] {
        match division {
            Division::Mpo => &self.mpo,
            Division::Fpo => &self.fpo,
        }
    }
}
