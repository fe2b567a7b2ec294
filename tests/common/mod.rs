#![allow(dead_code)]

use std::time::Duration;

use cricket_scraper::{ClientConfig, CricketClient};
use wiremock::{MockServer, ResponseTemplate};

pub const PLAYER_PROFILE: &str = include_str!("../fixtures/player_profile.html");
pub const RANKINGS_BATTING: &str = include_str!("../fixtures/rankings_batting.html");
pub const LIVE_SCORES: &str = include_str!("../fixtures/live_scores.html");
pub const SCHEDULE: &str = include_str!("../fixtures/schedule.html");
pub const NEWS: &str = include_str!("../fixtures/news.html");
pub const SCORECARD: &str = include_str!("../fixtures/scorecard.html");
pub const COMMENTARY: &str = include_str!("../fixtures/commentary.html");

/// Settings pointing every request (site pages and searches) at `server`.
pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(server.uri())
        .with_search_endpoint(format!("{}/html/", server.uri()))
        .with_profile_site("127.0.0.1")
        .with_timeout(Duration::from_millis(500))
}

pub fn client(server: &MockServer) -> CricketClient {
    CricketClient::with_config(config(server))
}

pub fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into().into_bytes(), "text/html; charset=utf-8")
}

/// A search provider result page listing `urls` in rank order.
pub fn search_page(urls: &[String]) -> ResponseTemplate {
    let results = urls
        .iter()
        .map(|url| {
            format!(
                r#"<div class="result results_links results_links_deep web-result">
                     <h2 class="result__title"><a rel="nofollow" class="result__a" href="{url}">Result {url}</a></h2>
                     <a class="result__snippet" href="{url}">Snippet for {url}</a>
                   </div>"#
            )
        })
        .collect::<String>();
    html(format!(
        "<html><body><div id=\"links\" class=\"results\">{results}</div></body></html>"
    ))
}
