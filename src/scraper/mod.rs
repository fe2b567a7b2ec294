pub(crate) mod commentary;
pub(crate) mod live;
pub(crate) mod news;
pub(crate) mod player;
pub(crate) mod rankings;
pub(crate) mod schedule;
pub(crate) mod scorecard;
pub(crate) mod search;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{CricketError, FetchFailure, Result};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

/// Fetch a URL and return the response body.
///
/// Sends the configured client identity and applies the configured timeout to
/// this request only. Never retries.
pub(crate) async fn get_page(
    client: &reqwest::Client,
    config: &ClientConfig,
    url: &str,
) -> Result<String> {
    debug!(url, "fetching page");

    let response = client
        .get(url)
        .header(USER_AGENT, config.user_agent.as_str())
        .header(ACCEPT, ACCEPT_HTML)
        .timeout(config.timeout)
        .send()
        .await
        .map_err(|e| CricketError::Fetch {
            url: url.to_owned(),
            reason: classify(&e),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CricketError::Fetch {
            url: url.to_owned(),
            reason: FetchFailure::HttpStatus(status.as_u16()),
        });
    }

    response.text().await.map_err(|e| CricketError::Fetch {
        url: url.to_owned(),
        reason: if e.is_timeout() {
            FetchFailure::Timeout
        } else {
            FetchFailure::Body(e.to_string())
        },
    })
}

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(
    client: &reqwest::Client,
    config: &ClientConfig,
    url: &str,
) -> Result<Html> {
    let body = get_page(client, config, url).await?;
    Ok(Html::parse_document(&body))
}

fn classify(err: &reqwest::Error) -> FetchFailure {
    if err.is_timeout() {
        FetchFailure::Timeout
    } else {
        FetchFailure::Connection(err.to_string())
    }
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .and_then(|d| d.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .unwrap_or_default()
        .trim()
        .replace(['\n', '\t'], "")
        .to_string()
}

/// All text inside `element`, whitespace-collapsed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().split_whitespace().join(" ")
}

/// Whitespace-collapsed text of the first match, or `None` when there is no
/// match or it is empty.
pub(crate) fn select_full_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|e| element_text(&e))
        .and_then(non_empty)
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// `href` of the first matching element, resolved against the base URL.
pub(crate) fn select_href(
    element: &ElementRef,
    selector: &Selector,
    config: &ClientConfig,
) -> Option<String> {
    element
        .select(selector)
        .find_map(|e| e.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(|href| config.absolute_url(href))
}

/// Direct element children, in document order.
pub(crate) fn child_elements<'a>(element: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// The match title shown in the page header, falling back to `<title>`.
pub(crate) fn page_title(document: &Html) -> Result<Option<String>> {
    let header_selector = Selector::parse("h1.cb-nav-hdr, h1")?;
    let root = document.root_element();
    if let Some(title) = select_full_text(&root, &header_selector) {
        let title = title
            .split(" - Live Cricket")
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        return Ok(non_empty(title));
    }

    let title_selector = Selector::parse("title")?;
    Ok(select_full_text(&root, &title_selector).and_then(|t| {
        non_empty(t.split(" | ").next().unwrap_or_default().trim().to_string())
    }))
}
