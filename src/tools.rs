//! Named-tool dispatch over JSON.
//!
//! A tool call is a JSON object `{"tool": <name>, "arguments": {...}}`. It is
//! parsed into a [`ToolCall`], run against a [`CricketClient`], and the record
//! it produces is returned as JSON. Failures carry a stable `code` so callers
//! can tell a timeout from an unknown player without string matching.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{instrument, warn};

use crate::client::CricketClient;
use crate::error::CricketError;

/// Every tool name [`ToolCall::parse`] accepts.
pub const TOOL_NAMES: &[&str] = &[
    "get_player_stats",
    "get_icc_rankings",
    "get_live_matches",
    "get_cricket_schedule",
    "get_cricket_news",
    "get_match_scorecard",
    "get_live_commentary",
    "web_search",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerStatsArgs {
    pub player_name: String,
    #[serde(default)]
    pub match_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingsArgs {
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScorecardArgs {
    pub match_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentaryArgs {
    pub match_url: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSearchArgs {
    pub query: String,
    #[serde(default)]
    pub num_results: Option<usize>,
}

/// A parsed tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    GetPlayerStats(PlayerStatsArgs),
    GetIccRankings(RankingsArgs),
    GetLiveMatches,
    GetCricketSchedule,
    GetCricketNews,
    GetMatchScorecard(ScorecardArgs),
    GetLiveCommentary(CommentaryArgs),
    WebSearch(WebSearchArgs),
}

impl ToolCall {
    /// Parse a raw `{"tool": ..., "arguments": ...}` object. Missing or null
    /// arguments are treated as an empty object.
    pub fn from_json(call: &Value) -> Result<ToolCall, ToolError> {
        let name = call
            .get("tool")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::validation("tool call is missing a string 'tool' field"))?;
        let arguments = call.get("arguments").cloned().unwrap_or(Value::Null);
        ToolCall::parse(name, arguments)
    }

    /// Build a call from a tool name and its JSON arguments.
    pub fn parse(name: &str, arguments: Value) -> Result<ToolCall, ToolError> {
        let arguments = match arguments {
            Value::Null => json!({}),
            other => other,
        };

        let call = match name {
            "get_player_stats" => ToolCall::GetPlayerStats(args(name, arguments)?),
            "get_icc_rankings" => ToolCall::GetIccRankings(args(name, arguments)?),
            "get_live_matches" => ToolCall::GetLiveMatches,
            "get_cricket_schedule" => ToolCall::GetCricketSchedule,
            "get_cricket_news" => ToolCall::GetCricketNews,
            "get_match_scorecard" => ToolCall::GetMatchScorecard(args(name, arguments)?),
            "get_live_commentary" => ToolCall::GetLiveCommentary(args(name, arguments)?),
            "web_search" => ToolCall::WebSearch(args(name, arguments)?),
            other => {
                return Err(ToolError::validation(format!(
                    "unknown tool '{other}', expected one of {}",
                    TOOL_NAMES.join(", ")
                )))
            }
        };
        Ok(call)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::GetPlayerStats(_) => "get_player_stats",
            ToolCall::GetIccRankings(_) => "get_icc_rankings",
            ToolCall::GetLiveMatches => "get_live_matches",
            ToolCall::GetCricketSchedule => "get_cricket_schedule",
            ToolCall::GetCricketNews => "get_cricket_news",
            ToolCall::GetMatchScorecard(_) => "get_match_scorecard",
            ToolCall::GetLiveCommentary(_) => "get_live_commentary",
            ToolCall::WebSearch(_) => "web_search",
        }
    }
}

fn args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::validation(format!("invalid arguments for {tool}: {e}")))
}

/// A failed tool call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{code}: {message}")]
pub struct ToolError {
    /// Stable kind, e.g. `not_found` or `fetch_timeout`.
    pub code: &'static str,
    pub message: String,
}

impl ToolError {
    fn validation(message: impl Into<String>) -> Self {
        Self {
            code: "validation",
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "internal",
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "error": { "code": self.code, "message": self.message } })
    }
}

impl From<CricketError> for ToolError {
    fn from(err: CricketError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Run a tool call and return its record as JSON.
#[instrument(skip(client), fields(tool = call.name()))]
pub async fn call(client: &CricketClient, call: ToolCall) -> Result<Value, ToolError> {
    let result = match call {
        ToolCall::GetPlayerStats(a) => to_json(
            client
                .get_player_stats(&a.player_name, a.match_format.as_deref())
                .await,
        ),
        ToolCall::GetIccRankings(a) => to_json(client.get_icc_rankings(&a.category).await),
        ToolCall::GetLiveMatches => to_json(client.get_live_matches().await),
        ToolCall::GetCricketSchedule => to_json(client.get_cricket_schedule().await),
        ToolCall::GetCricketNews => to_json(client.get_cricket_news().await),
        ToolCall::GetMatchScorecard(a) => to_json(client.get_match_scorecard(&a.match_url).await),
        ToolCall::GetLiveCommentary(a) => {
            to_json(client.get_live_commentary(&a.match_url, a.limit).await)
        }
        ToolCall::WebSearch(a) => to_json(client.web_search(&a.query, a.num_results).await),
    };
    if let Err(err) = &result {
        warn!(code = err.code, message = %err.message, "tool call failed");
    }
    result
}

fn to_json<T: Serialize>(result: crate::Result<T>) -> Result<Value, ToolError> {
    let record = result?;
    serde_json::to_value(record).map_err(|e| ToolError::internal(e.to_string()))
}
