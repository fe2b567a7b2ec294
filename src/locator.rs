//! Resolving a player's name to their profile page on the data source.

use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{CricketError, Result};
use crate::model::SearchResult;
use crate::scraper::search;

/// Find the profile page URL for a player by name.
///
/// Searches the web restricted to the configured profile site and returns the
/// first hit that is a player profile, exactly as the search provider gave it.
/// Ambiguous names resolve to the provider's top-ranked profile.
#[instrument(skip(client, config))]
pub(crate) async fn locate_profile(
    client: &reqwest::Client,
    config: &ClientConfig,
    player_name: &str,
) -> Result<String> {
    let name = player_name.trim();
    if name.is_empty() {
        return Err(CricketError::Validation {
            field: "player_name",
            value: player_name.to_string(),
            expected: "a non-empty player name",
        });
    }

    let query = format!("{name} profile");
    let results = search::search(
        client,
        config,
        &query,
        config.search_results,
        Some(config.profile_site.as_str()),
    )
    .await?;

    match first_profile_url(results, &config.profile_site) {
        Some(url) => {
            debug!(url, "located profile");
            Ok(url)
        }
        None => Err(CricketError::NotFound {
            what: format!("player profile for '{name}'"),
        }),
    }
}

/// The first result, in rank order, that is a profile page on `site`.
///
/// Profile pages live at `/profiles/{numeric id}/{slug}` on `site` or one of
/// its subdomains.
///
/// ```
/// use cricket_scraper::{first_profile_url, SearchResult};
///
/// let results = vec![
///     SearchResult {
///         title: "Virat Kohli news".into(),
///         url: "https://www.cricbuzz.com/cricket-news/1/kohli".into(),
///         snippet: None,
///     },
///     SearchResult {
///         title: "Virat Kohli profile".into(),
///         url: "https://www.cricbuzz.com/profiles/1413/virat-kohli".into(),
///         snippet: None,
///     },
/// ];
/// assert_eq!(
///     first_profile_url(results, "cricbuzz.com").as_deref(),
///     Some("https://www.cricbuzz.com/profiles/1413/virat-kohli")
/// );
/// ```
pub fn first_profile_url(
    results: impl IntoIterator<Item = SearchResult>,
    site: &str,
) -> Option<String> {
    results
        .into_iter()
        .map(|result| result.url)
        .find(|url| is_profile_url(url, site))
}

pub(crate) fn is_profile_url(url: &str, site: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let site = site.trim().trim_start_matches("www.");
    let on_site = host == site
        || host
            .strip_suffix(site)
            .is_some_and(|prefix| prefix.ends_with('.'));
    if !on_site {
        return false;
    }

    let mut segments = parsed.path().split('/').filter(|s| !s.is_empty());
    matches!(
        (segments.next(), segments.next().map(str::parse::<u64>)),
        (Some("profiles"), Some(Ok(_)))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(url: &str) -> SearchResult {
        SearchResult {
            title: "result".to_string(),
            url: url.to_string(),
            snippet: None,
        }
    }

    #[test]
    fn test_first_profile_url_skips_other_pages() {
        let results = vec![
            hit("https://en.wikipedia.org/wiki/Virat_Kohli"),
            hit("https://www.cricbuzz.com/cricket-news/135900/kohli"),
            hit("https://www.cricbuzz.com/profiles/1413/virat-kohli"),
            hit("https://www.cricbuzz.com/profiles/9999/someone-else"),
        ];
        assert_eq!(
            first_profile_url(results, "cricbuzz.com").as_deref(),
            Some("https://www.cricbuzz.com/profiles/1413/virat-kohli")
        );
    }

    #[test]
    fn test_first_profile_url_none() {
        let results = vec![hit("https://www.espncricinfo.com/cricketers/virat-kohli-253802")];
        assert_eq!(first_profile_url(results, "cricbuzz.com"), None);
        assert_eq!(first_profile_url(Vec::new(), "cricbuzz.com"), None);
    }

    #[test]
    fn test_is_profile_url() {
        assert!(is_profile_url("https://cricbuzz.com/profiles/1/a", "cricbuzz.com"));
        assert!(is_profile_url("https://m.cricbuzz.com/profiles/1/a", "www.cricbuzz.com"));
        assert!(is_profile_url("http://127.0.0.1:8080/profiles/1413/virat-kohli", "127.0.0.1"));
        assert!(!is_profile_url("https://notcricbuzz.com/profiles/1/a", "cricbuzz.com"));
        assert!(!is_profile_url("https://www.cricbuzz.com/profiles/abc/a", "cricbuzz.com"));
        assert!(!is_profile_url("https://www.cricbuzz.com/profiles", "cricbuzz.com"));
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected_before_search() {
        let config = ClientConfig::default().with_search_endpoint("http://127.0.0.1:9/html/");
        let result = locate_profile(&reqwest::Client::new(), &config, "   ").await;
        assert!(matches!(
            result,
            Err(CricketError::Validation { field: "player_name", .. })
        ));
    }
}
