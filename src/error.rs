use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching, searching or extracting cricket data.
#[derive(thiserror::Error, Debug)]
pub enum CricketError {
    /// A page could not be fetched.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: FetchFailure },

    /// The search provider failed (rate limiting, no connectivity, bad status).
    #[error("search failed: {reason}")]
    Search { reason: String },

    /// No plausible page exists for the requested entity.
    #[error("not found: {what}")]
    NotFound { what: String },

    /// The page was fetched but does not have the expected top-level shape.
    #[error("unexpected page shape: expected {expected}")]
    Parse { expected: &'static str },

    /// A caller-supplied argument is not one of the recognized values.
    #[error("invalid {field} '{value}': expected {expected}")]
    Validation {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),
}

/// Why a page fetch failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("unexpected status {0}")]
    HttpStatus(u16),

    #[error("failed to read response body: {0}")]
    Body(String),
}

impl CricketError {
    /// Stable machine-readable kind of this error, used when reporting tool failures.
    pub fn code(&self) -> &'static str {
        match self {
            CricketError::Fetch { reason, .. } => match reason {
                FetchFailure::Timeout => "fetch_timeout",
                FetchFailure::Connection(_) => "fetch_connection",
                FetchFailure::HttpStatus(_) => "fetch_http_status",
                FetchFailure::Body(_) => "fetch_body",
            },
            CricketError::Search { .. } => "search",
            CricketError::NotFound { .. } => "not_found",
            CricketError::Parse { .. } => "parse",
            CricketError::Validation { .. } => "validation",
            CricketError::Selector(_) => "internal",
        }
    }
}

impl<'a> From<SelectorErrorKind<'a>> for CricketError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        CricketError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CricketError>;
