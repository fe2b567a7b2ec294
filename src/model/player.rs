use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Format, StatValue};

/// Metric name to value for one format, e.g. `runs -> 8848`.
pub type FormatLine = BTreeMap<String, StatValue>;

/// Identity and bio of a player, resolved from their profile page.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub profile_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowling_style: Option<String>,
}

/// Current ICC positions in each format. `None` means unranked or not shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormatRanks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odi: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t20: Option<u32>,
}

impl FormatRanks {
    pub fn get(&self, format: Format) -> Option<u32> {
        match format {
            Format::Test => self.test,
            Format::Odi => self.odi,
            Format::T20 => self.t20,
        }
    }
}

/// Batting and bowling ranks as shown on a profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerRankings {
    pub batting: FormatRanks,
    pub bowling: FormatRanks,
}

/// Career statistics keyed by the format label used on the page
/// (`Test`, `ODI`, `T20`, and any league rows such as `IPL`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CareerStats(pub BTreeMap<String, FormatLine>);

impl CareerStats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The line for `format`, matching the page label case-insensitively.
    pub fn get(&self, format: Format) -> Option<&FormatLine> {
        self.0
            .iter()
            .find(|(label, _)| format.matches_label(label))
            .map(|(_, line)| line)
    }
}

/// Everything the profile page says about a player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStats {
    pub profile: PlayerProfile,
    pub rankings: PlayerRankings,
    pub batting: CareerStats,
    pub bowling: CareerStats,
    /// Set when the stats were narrowed to a single format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}
