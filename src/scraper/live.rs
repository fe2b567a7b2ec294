use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::match_url;
use crate::model::{MatchSummary, MatchTeam};
use crate::scraper::{self, child_elements, element_text, non_empty, select_full_text, select_href};

/// Status classes the listing uses for matches currently in play.
const LIVE_STATUS_CLASSES: &[&str] = &[
    "cb-text-live",
    "cb-text-inprogress",
    "cb-text-stump",
    "cb-text-lunch",
    "cb-text-tea",
    "cb-text-rain",
    "cb-text-innings",
    "cb-text-drinks",
];

#[instrument(skip(client, config))]
pub(crate) async fn get_live_matches(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<Vec<MatchSummary>> {
    let url = format!("{}/cricket-match/live-scores", config.base_url);
    let document = scraper::get_document(client, config, &url).await?;
    let matches = parse_live_matches(&document, config)?;
    debug!(count = matches.len(), "parsed live matches");
    Ok(matches)
}

pub(crate) fn parse_live_matches(
    document: &scraper::Html,
    config: &ClientConfig,
) -> Result<Vec<MatchSummary>> {
    let card_selector = Selector::parse("div.cb-mtch-lst")?;
    let status_selector = Selector::parse("[class*=\"cb-text-\"]")?;

    let mut matches = Vec::new();
    for card in document.select(&card_selector) {
        let Some(status) = card
            .select(&status_selector)
            .find(|e| e.value().classes().any(|c| LIVE_STATUS_CLASSES.contains(&c)))
        else {
            continue;
        };
        matches.push(parse_card(&card, non_empty(element_text(&status)), config)?);
    }
    Ok(matches)
}

fn parse_card(
    card: &ElementRef,
    status: Option<String>,
    config: &ClientConfig,
) -> Result<MatchSummary> {
    let title_selector = Selector::parse("h3 a")?;
    let title = select_full_text(card, &title_selector);
    let url = select_href(card, &title_selector, config);
    let match_id = url.as_deref().and_then(match_url::match_id);

    // The series heading is the nearest preceding h2 in the same listing block.
    let series = card
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "h2")
        .map(|h2| element_text(&h2))
        .and_then(non_empty);

    let team_selector = Selector::parse("div.cb-hmscg-bat-txt, div.cb-hmscg-bwl-txt")?;
    let teams = card
        .select(&team_selector)
        .filter_map(|row| parse_team(&row))
        .collect_vec();

    Ok(MatchSummary {
        match_id,
        title,
        series,
        teams,
        status,
        url,
    })
}

fn parse_team(row: &ElementRef) -> Option<MatchTeam> {
    let cells = child_elements(row);
    let is_name = |cell: &ElementRef| cell.value().classes().any(|c| c == "cb-hmscg-tm-nm");

    let name = cells
        .iter()
        .find(|cell| is_name(cell))
        .map(element_text)
        .and_then(non_empty)?;
    let score = cells
        .iter()
        .filter(|cell| !is_name(cell))
        .map(element_text)
        .find(|text| !text.is_empty());

    Some(MatchTeam { name, score })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> scraper::Html {
        scraper::Html::parse_document(include_str!("../../tests/fixtures/live_scores.html"))
    }

    #[test]
    fn test_only_live_cards_are_kept() {
        let matches = parse_live_matches(&fixture(), &ClientConfig::default()).unwrap();
        let titles = matches.iter().filter_map(|m| m.title.as_deref()).collect_vec();
        assert_eq!(
            titles,
            vec!["India vs Australia, 2nd Test", "England vs Pakistan, 3rd T20I"]
        );
    }

    #[test]
    fn test_parse_live_card() {
        let matches = parse_live_matches(&fixture(), &ClientConfig::default()).unwrap();
        let first = &matches[0];
        assert_eq!(first.match_id, Some(100238));
        assert_eq!(
            first.url.as_deref(),
            Some("https://www.cricbuzz.com/live-cricket-scores/100238/ind-vs-aus-2nd-test-australia-tour-of-india-2025")
        );
        assert_eq!(first.series.as_deref(), Some("Australia tour of India, 2025"));
        assert_eq!(first.status.as_deref(), Some("Day 2: 2nd Session"));
        assert_eq!(
            first.teams,
            vec![
                MatchTeam {
                    name: "IND".to_string(),
                    score: Some("318-2 (90 Ovs)".to_string()),
                },
                MatchTeam {
                    name: "AUS".to_string(),
                    score: None,
                },
            ]
        );

        let second = &matches[1];
        assert_eq!(second.series.as_deref(), Some("Pakistan tour of England, 2025"));
        assert_eq!(second.status.as_deref(), Some("Innings Break"));
    }

    #[test]
    fn test_no_live_matches_is_empty() {
        let document = scraper::Html::parse_document(
            r#"<div class="cb-mtch-lst cb-col cb-col-100 cb-tms-itm">
                <h3><a href="/live-cricket-scores/1/a-vs-b">A vs B</a></h3>
                <div class="cb-text-complete">A won by 10 runs</div>
            </div>"#,
        );
        let matches = parse_live_matches(&document, &ClientConfig::default()).unwrap();
        assert!(matches.is_empty());
    }
}
