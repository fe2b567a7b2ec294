//! Rewriting match URLs between page tabs.
//!
//! Cricbuzz serves every view of a match under `/{tab}/{match id}/{slug}`.
//! Only the tab segment is swapped; the rest of the URL (including any query
//! string, whose parameters the site treats as significant) is kept
//! byte-for-byte.

use crate::config::ClientConfig;
use crate::error::{CricketError, Result};

/// Tab whose default view is the ball-by-ball commentary feed.
pub const COMMENTARY_TAB: &str = "live-cricket-scores";
pub const SCORECARD_TAB: &str = "live-cricket-scorecard";
const FULL_COMMENTARY_TAB: &str = "cricket-full-commentary";

const MATCH_TABS: &[&str] = &[
    COMMENTARY_TAB,
    SCORECARD_TAB,
    FULL_COMMENTARY_TAB,
    "cricket-scores",
    "cricket-match-facts",
    "cricket-match-squads",
    "live-cricket-over-by-over",
    "cricket-match-highlights",
];

const EXPECTED_MATCH_URL: &str = "a match URL such as /live-cricket-scores/<id>/<slug>";

/// The scorecard-tab form of a match URL.
pub fn to_scorecard_url(url: &str, config: &ClientConfig) -> Result<String> {
    retab(url, config, |_| SCORECARD_TAB)
}

/// The commentary-tab form of a match URL. A full-commentary URL is already a
/// commentary view and is kept as is.
pub fn to_commentary_url(url: &str, config: &ClientConfig) -> Result<String> {
    retab(url, config, |current| {
        if current == FULL_COMMENTARY_TAB {
            FULL_COMMENTARY_TAB
        } else {
            COMMENTARY_TAB
        }
    })
}

/// Numeric match id from a match URL path, e.g. `100238` from
/// `/live-cricket-scores/100238/ind-vs-aus-2nd-test`.
pub fn match_id(url: &str) -> Option<u64> {
    let (_, path) = split_path(url)?;
    let mut segments = path.split(['/', '?', '#']);
    let tab = segments.next()?;
    if !MATCH_TABS.contains(&tab) {
        return None;
    }
    segments.next()?.parse().ok()
}

fn retab(
    url: &str,
    config: &ClientConfig,
    tab_for: impl FnOnce(&str) -> &'static str,
) -> Result<String> {
    let invalid = || CricketError::Validation {
        field: "match_url",
        value: url.to_string(),
        expected: EXPECTED_MATCH_URL,
    };

    let absolute = config.absolute_url(url.trim());
    let (origin, path) = split_path(&absolute).ok_or_else(invalid)?;
    let tab_end = path.find(['/', '?', '#']).unwrap_or(path.len());
    let current = &path[..tab_end];
    if !MATCH_TABS.contains(&current) {
        return Err(invalid());
    }

    Ok(format!("{origin}/{}{}", tab_for(current), &path[tab_end..]))
}

/// Split an absolute URL into `scheme://host` and the path after its leading `/`.
fn split_path(url: &str) -> Option<(&str, &str)> {
    let host_start = url.find("://")? + 3;
    let slash = host_start + url[host_start..].find('/')?;
    Some((&url[..slash], &url[slash + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_scorecard_url() {
        let config = ClientConfig::default();
        assert_eq!(
            to_scorecard_url(
                "https://www.cricbuzz.com/live-cricket-scores/100238/ind-vs-aus-2nd-test",
                &config
            )
            .unwrap(),
            "https://www.cricbuzz.com/live-cricket-scorecard/100238/ind-vs-aus-2nd-test"
        );
        assert_eq!(
            to_scorecard_url("/cricket-scores/100238/ind-vs-aus", &config).unwrap(),
            "https://www.cricbuzz.com/live-cricket-scorecard/100238/ind-vs-aus"
        );
    }

    #[test]
    fn test_query_is_preserved_verbatim() {
        let config = ClientConfig::default();
        let url = "https://www.cricbuzz.com/live-cricket-scorecard/1/a-vs-b?tab=x%2Fy&lang=en#top";
        assert_eq!(
            to_commentary_url(url, &config).unwrap(),
            "https://www.cricbuzz.com/live-cricket-scores/1/a-vs-b?tab=x%2Fy&lang=en#top"
        );
    }

    #[test]
    fn test_commentary_url_is_idempotent() {
        let config = ClientConfig::default();
        let url = "https://www.cricbuzz.com/live-cricket-scores/1/a-vs-b";
        assert_eq!(to_commentary_url(url, &config).unwrap(), url);

        let full = "https://www.cricbuzz.com/cricket-full-commentary/1/a-vs-b";
        assert_eq!(to_commentary_url(full, &config).unwrap(), full);
    }

    #[test]
    fn test_unknown_tab_is_rejected() {
        let config = ClientConfig::default();
        for url in [
            "https://www.cricbuzz.com/cricket-news/1/story",
            "https://www.cricbuzz.com",
            "not a url",
        ] {
            assert!(
                matches!(
                    to_scorecard_url(url, &config),
                    Err(CricketError::Validation { field: "match_url", .. })
                ),
                "{url}"
            );
        }
    }

    #[test]
    fn test_match_id() {
        assert_eq!(
            match_id("https://www.cricbuzz.com/live-cricket-scores/100238/ind-vs-aus"),
            Some(100238)
        );
        assert_eq!(match_id("https://www.cricbuzz.com/profiles/1413/virat-kohli"), None);
    }
}
