use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{CricketError, Result};
use crate::model::*;
use crate::{locator, scraper};

/// Number of commentary lines returned when the caller does not ask for a count.
pub const DEFAULT_COMMENTARY_LIMIT: usize = 10;

/// The main entry point for fetching cricket data.
///
/// `CricketClient` wraps a [`reqwest::Client`] and a [`ClientConfig`] and
/// exposes one method per capability. Every call validates its arguments
/// before touching the network and performs its page fetches one after
/// another.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cricket_scraper::Result<()> {
/// use cricket_scraper::CricketClient;
///
/// let client = CricketClient::new();
/// let stats = client.get_player_stats("Virat Kohli", Some("ODI")).await?;
/// println!("{} ({} missing fields)", stats.record.profile.name, stats.missing.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CricketClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CricketClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new client with the given settings.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, TLS or connection pooling.
    /// Timeouts and the user agent still come from `config`.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up a player by name and return their profile, ranks and career
    /// statistics, optionally narrowed to one format (`Test`, `ODI`, `T20`).
    #[instrument(skip(self))]
    pub async fn get_player_stats(
        &self,
        player_name: &str,
        format: Option<&str>,
    ) -> Result<Extracted<PlayerStats>> {
        let format = format.map(Format::from_arg).transpose()?;
        let profile_url = self.locate_player(player_name).await?;
        let stats = scraper::player::get_player(&self.http, &self.config, &profile_url).await?;
        Ok(stats.map(|stats| stats.filter_by_format(format)))
    }

    /// Extract a player's statistics from a known profile page URL.
    #[instrument(skip(self))]
    pub async fn get_player_profile(&self, profile_url: &str) -> Result<Extracted<PlayerStats>> {
        scraper::player::get_player(&self.http, &self.config, profile_url).await
    }

    /// Resolve a player's name to their profile page URL.
    #[instrument(skip(self))]
    pub async fn locate_player(&self, player_name: &str) -> Result<String> {
        locator::locate_profile(&self.http, &self.config, player_name).await
    }

    /// Fetch the current ICC men's rankings for `batting`, `bowling`,
    /// `all-rounder` or `teams`.
    #[instrument(skip(self))]
    pub async fn get_icc_rankings(&self, category: &str) -> Result<Extracted<Rankings>> {
        let category = RankingCategory::from_arg(category)?;
        scraper::rankings::get_rankings(&self.http, &self.config, category).await
    }

    /// Fetch matches currently in play.
    #[instrument(skip(self))]
    pub async fn get_live_matches(&self) -> Result<Vec<MatchSummary>> {
        scraper::live::get_live_matches(&self.http, &self.config).await
    }

    /// Fetch upcoming international fixtures.
    #[instrument(skip(self))]
    pub async fn get_cricket_schedule(&self) -> Result<Vec<ScheduledMatch>> {
        scraper::schedule::get_schedule(&self.http, &self.config).await
    }

    /// Fetch the latest news stories.
    #[instrument(skip(self))]
    pub async fn get_cricket_news(&self) -> Result<Vec<NewsItem>> {
        scraper::news::get_news(&self.http, &self.config).await
    }

    /// Fetch the full scorecard of a match. Any tab of the match may be given.
    #[instrument(skip(self))]
    pub async fn get_match_scorecard(&self, match_url: &str) -> Result<Extracted<Scorecard>> {
        scraper::scorecard::get_scorecard(&self.http, &self.config, match_url).await
    }

    /// Fetch the most recent commentary lines of a match, newest first.
    #[instrument(skip(self))]
    pub async fn get_live_commentary(
        &self,
        match_url: &str,
        limit: Option<usize>,
    ) -> Result<Extracted<Commentary>> {
        let limit = limit.unwrap_or(DEFAULT_COMMENTARY_LIMIT);
        scraper::commentary::get_commentary(&self.http, &self.config, match_url, limit).await
    }

    /// Run a general web search.
    #[instrument(skip(self))]
    pub async fn web_search(
        &self,
        query: &str,
        num_results: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CricketError::Validation {
                field: "query",
                value: query.to_string(),
                expected: "a non-empty search query",
            });
        }
        let num_results = num_results.unwrap_or(self.config.search_results);
        let results = scraper::search::search(&self.http, &self.config, query, num_results, None)
            .await?
            .collect::<Vec<_>>();
        debug!(count = results.len(), "web search finished");
        Ok(results)
    }
}
