use serde::Serialize;

use crate::model::StatValue;

/// A full match scorecard.
#[derive(Debug, Clone, Serialize)]
pub struct Scorecard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub scorecard_url: String,
    /// In the order the innings were played.
    pub innings: Vec<ScorecardInnings>,
}

/// One innings: batting lines in batting order, bowling lines in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardInnings {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<String>,
    pub batting: Vec<BattingLine>,
    pub bowling: Vec<BowlingLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingLine {
    pub name: String,
    /// Captain / keeper marker shown after the name, e.g. `c` or `wk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balls: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fours: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sixes: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_rate: Option<StatValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingLine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overs: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maidens: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wickets: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_balls: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wides: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economy: Option<StatValue>,
}
