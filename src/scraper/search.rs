use ::scraper::{ElementRef, Selector};
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{CricketError, Result};
use crate::model::{SearchResult, SearchResults};
use crate::scraper::{self, element_text, non_empty, select_full_text};

/// Run a web search and return at most `num_results` hits in rank order.
///
/// With a `site_filter` the query is restricted to that domain. Any failure
/// talking to the provider is reported as [`CricketError::Search`].
#[instrument(skip(client, config))]
pub(crate) async fn search(
    client: &reqwest::Client,
    config: &ClientConfig,
    query: &str,
    num_results: usize,
    site_filter: Option<&str>,
) -> Result<SearchResults> {
    if num_results == 0 {
        return Ok(SearchResults::empty());
    }

    let query = match site_filter {
        Some(site) => format!("{query} site:{site}"),
        None => query.to_string(),
    };
    let url = Url::parse_with_params(&config.search_endpoint, &[("q", query.as_str())])
        .map_err(|e| CricketError::Search {
            reason: format!("invalid search endpoint {}: {e}", config.search_endpoint),
        })?;

    let body = scraper::get_page(client, config, url.as_str())
        .await
        .map_err(|e| CricketError::Search {
            reason: e.to_string(),
        })?;

    let document = scraper::Html::parse_document(&body);
    let results = parse_search_results(&document, &config.search_endpoint, num_results)?;
    debug!(count = results.len(), "parsed search results");
    Ok(SearchResults::new(results))
}

pub(crate) fn parse_search_results(
    document: &scraper::Html,
    endpoint: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>> {
    let result_selector = Selector::parse("div.result")?;
    let link_selector = Selector::parse("a.result__a")?;
    let snippet_selector = Selector::parse(".result__snippet")?;
    let base = Url::parse(endpoint).ok();

    Ok(document
        .select(&result_selector)
        .filter(|result| !is_ad(result))
        .filter_map(|result| {
            let link = result.select(&link_selector).next()?;
            let title = non_empty(element_text(&link))?;
            let url = result_url(link.value().attr("href")?, base.as_ref())?;
            Some(SearchResult {
                title,
                url,
                snippet: select_full_text(&result, &snippet_selector),
            })
        })
        .take(max_results)
        .collect())
}

fn is_ad(result: &ElementRef) -> bool {
    result.value().classes().any(|c| c == "result--ad")
}

/// Destination of a result link. Redirect links (`//duckduckgo.com/l/?uddg=…`)
/// are unwrapped; any other `http(s)` link is kept exactly as written.
fn result_url(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();
    let resolved = match base {
        Some(base) => base.join(href).ok(),
        None => Url::parse(href).ok(),
    };
    let target = resolved
        .filter(|u| u.path() == "/l/")
        .and_then(|u| {
            u.query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        });

    match target {
        Some(target) => is_http(&target).then_some(target),
        None => is_http(href).then(|| href.to_string()),
    }
}

fn is_http(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
