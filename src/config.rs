use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.cricbuzz.com";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
pub const DEFAULT_PROFILE_SITE: &str = "cricbuzz.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SEARCH_RESULTS: usize = 5;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Settings threaded through every fetch, search and lookup.
///
/// All fields have defaults pointing at the live data source; tests override
/// `base_url` and `search_endpoint` to aim at a local server.
///
/// ```
/// use std::time::Duration;
/// use cricket_scraper::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(3))
///     .with_search_results(8);
/// assert_eq!(config.search_results, 8);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the data source, without a trailing slash.
    pub base_url: String,
    /// HTML search endpoint taking the query in its `q` parameter.
    pub search_endpoint: String,
    /// Domain used to restrict profile searches and to vet candidate URLs.
    pub profile_site: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Client identity sent with every request.
    pub user_agent: String,
    /// Default number of search results when the caller does not ask for a count.
    pub search_results: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            profile_site: DEFAULT_PROFILE_SITE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            search_results: DEFAULT_SEARCH_RESULTS,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    pub fn with_profile_site(mut self, site: impl Into<String>) -> Self {
        self.profile_site = site.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_search_results(mut self, count: usize) -> Self {
        self.search_results = count;
        self
    }

    /// Resolve a site-relative path (or pass an absolute URL through untouched).
    pub(crate) fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if let Some(rest) = href.strip_prefix("//") {
            format!("https://{rest}")
        } else if href.starts_with('/') {
            format!("{}{href}", self.base_url)
        } else {
            format!("{}/{href}", self.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            config.absolute_url("/live-cricket-scores/1/a-vs-b"),
            "http://127.0.0.1:8080/live-cricket-scores/1/a-vs-b"
        );
        assert_eq!(
            config.absolute_url("https://www.cricbuzz.com/x?y=%20"),
            "https://www.cricbuzz.com/x?y=%20"
        );
        assert_eq!(
            config.absolute_url("//static.cricbuzz.com/a.jpg"),
            "https://static.cricbuzz.com/a.jpg"
        );
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.search_results, 5);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }
}
