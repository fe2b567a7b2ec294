use serde::Serialize;

use crate::error::{CricketError, Result};
use crate::model::Format;

/// ICC ranking table family.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum RankingCategory {
    #[strum(to_string = "batting")]
    Batting,
    #[strum(to_string = "bowling")]
    Bowling,
    #[strum(
        to_string = "all-rounder",
        serialize = "allrounder",
        serialize = "all-rounders",
        serialize = "allrounders"
    )]
    AllRounder,
    #[strum(to_string = "teams")]
    Teams,
}

impl RankingCategory {
    pub const EXPECTED: &'static str = "one of batting, bowling, all-rounder, teams";

    /// Parse a caller-supplied category name.
    pub fn from_arg(value: &str) -> Result<RankingCategory> {
        value
            .trim()
            .parse()
            .map_err(|_| CricketError::Validation {
                field: "category",
                value: value.to_string(),
                expected: Self::EXPECTED,
            })
    }

    /// Prefix the rankings page uses to name this category's per-format tables.
    pub(crate) fn table_prefix(self) -> &'static str {
        match self {
            RankingCategory::Batting => "batsmen",
            RankingCategory::Bowling => "bowlers",
            RankingCategory::AllRounder => "allrounders",
            RankingCategory::Teams => "teams",
        }
    }
}

/// One row of a ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub position: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    /// Team tables only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<u32>,
    /// Team tables only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

/// The three per-format tables of a ranking category, each in page order.
#[derive(Debug, Clone, Serialize)]
pub struct Rankings {
    pub category: RankingCategory,
    #[serde(rename = "Test")]
    pub test: Vec<RankingEntry>,
    #[serde(rename = "ODI")]
    pub odi: Vec<RankingEntry>,
    #[serde(rename = "T20")]
    pub t20: Vec<RankingEntry>,
}

impl Rankings {
    pub fn group(&self, format: Format) -> &[RankingEntry] {
        match format {
            Format::Test => &self.test,
            Format::Odi => &self.odi,
            Format::T20 => &self.t20,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_category_from_arg() {
        assert_eq!(
            RankingCategory::from_arg("Batting").unwrap(),
            RankingCategory::Batting
        );
        assert_eq!(
            RankingCategory::from_arg("all-rounder").unwrap(),
            RankingCategory::AllRounder
        );
        assert_eq!(
            RankingCategory::from_arg("ALLROUNDERS").unwrap(),
            RankingCategory::AllRounder
        );
        assert!(matches!(
            RankingCategory::from_arg("captains"),
            Err(CricketError::Validation {
                field: "category",
                ..
            })
        ));
    }

    #[test]
    fn test_category_display_is_url_path() {
        assert_eq!(RankingCategory::AllRounder.to_string(), "all-rounder");
        assert_eq!(RankingCategory::Teams.to_string(), "teams");
    }

    #[test]
    fn test_every_category_round_trips_and_has_a_table_prefix() {
        let prefixes = RankingCategory::iter()
            .map(|category| {
                assert_eq!(
                    RankingCategory::from_arg(&category.to_string()).unwrap(),
                    category
                );
                category.table_prefix()
            })
            .collect::<Vec<_>>();
        assert_eq!(prefixes, vec!["batsmen", "bowlers", "allrounders", "teams"]);
    }
}
