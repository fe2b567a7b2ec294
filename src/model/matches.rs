use chrono::NaiveDate;
use serde::Serialize;

/// A match card from a listing page. Also the starting point for scorecard
/// and commentary look-ups via `url`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub teams: Vec<MatchTeam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A team line on a match card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

/// An upcoming fixture from the schedule page.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledMatch {
    /// Date heading exactly as published.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_parsed: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Flattened text of the entry.
    pub description: String,
}
