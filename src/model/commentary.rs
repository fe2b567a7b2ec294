use serde::Serialize;

/// Recent ball-by-ball commentary for a match.
#[derive(Debug, Clone, Serialize)]
pub struct Commentary {
    pub title: String,
    pub commentary_url: String,
    /// Source order (newest first), truncated to the requested limit.
    pub events: Vec<CommentaryEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentaryEvent {
    /// Ball marker such as `19.6`, when the line belongs to a delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over: Option<String>,
    pub text: String,
}
