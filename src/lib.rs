//! Scrape cricket player statistics, ICC rankings, live scores, schedules,
//! scorecards, commentary and news from cricbuzz.com.
//!
//! Player lookups go through a web search restricted to the data source, so a
//! free-text name is enough. Extraction tolerates layout drift: fields that
//! cannot be found are left out and listed in [`Extracted::missing`] instead
//! of failing the whole call.

pub use client::{CricketClient, DEFAULT_COMMENTARY_LIMIT};
pub use config::ClientConfig;
pub use error::{CricketError, FetchFailure, Result};
pub use filter::filter_by_format;
pub use locator::first_profile_url;
pub use match_url::{match_id, to_commentary_url, to_scorecard_url};
pub use model::*;
pub use tools::{ToolCall, ToolError};

mod client;
pub mod config;
pub mod error;
mod filter;
mod locator;
pub mod match_url;
pub mod model;
pub(crate) mod scraper;
pub mod tools;
