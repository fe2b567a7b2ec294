use serde::Serialize;

use crate::error::{CricketError, Result};

/// Cell texts the source uses for "no value recorded".
const ABSENT_MARKERS: &[&str] = &["", "-", "--", "N/A", "NA"];

/// A single statistic as shown on the page.
///
/// Numbers are kept as numbers; anything else (`DNB`, `183*`, `7/42`) is kept
/// verbatim rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    /// Parse cell text permissively. Returns `None` for absence markers so a
    /// missing value is never confused with a recorded zero.
    pub fn parse(text: &str) -> Option<StatValue> {
        let text = text.trim();
        if ABSENT_MARKERS.contains(&text) {
            return None;
        }
        if let Ok(v) = text.parse::<i64>() {
            return Some(StatValue::Int(v));
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(StatValue::Float(v)),
            _ => Some(StatValue::Text(text.to_string())),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Int(v) => Some(*v as f64),
            StatValue::Float(v) => Some(*v),
            StatValue::Text(_) => None,
        }
    }
}

/// The three international match formats.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Format {
    #[serde(rename = "Test")]
    #[strum(to_string = "Test")]
    Test,
    #[serde(rename = "ODI")]
    #[strum(to_string = "ODI")]
    Odi,
    #[serde(rename = "T20")]
    #[strum(to_string = "T20", serialize = "T20I")]
    T20,
}

impl Format {
    pub const EXPECTED: &'static str = "one of Test, ODI, T20";

    /// Parse a caller-supplied format name, case-insensitively.
    pub fn from_arg(value: &str) -> Result<Format> {
        value
            .trim()
            .parse()
            .map_err(|_| CricketError::Validation {
                field: "format",
                value: value.to_string(),
                expected: Self::EXPECTED,
            })
    }

    /// Whether a row or column label from the page denotes this format.
    pub fn matches_label(self, label: &str) -> bool {
        label
            .trim()
            .parse::<Format>()
            .map(|f| f == self)
            .unwrap_or(false)
    }
}

/// The outcome of running an extractor over a page.
///
/// `missing` lists the fields whose anchors were not found. An empty list
/// means the extraction was complete; otherwise the record is partial but
/// still valid.
#[derive(Debug, Clone, Serialize)]
pub struct Extracted<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
}

impl<T> Extracted<T> {
    pub fn new(record: T, missing: Vec<&'static str>) -> Self {
        Self { record, missing }
    }

    pub fn complete(record: T) -> Self {
        Self::new(record, Vec::new())
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn into_record(self) -> T {
        self.record
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extracted<U> {
        Extracted {
            record: f(self.record),
            missing: self.missing,
        }
    }
}
