use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{CricketError, Result};
use crate::match_url;
use crate::model::{BattingLine, BowlingLine, Extracted, Scorecard, ScorecardInnings, StatValue};
use crate::scraper::{self, child_elements, element_text, non_empty};

/// Row labels that list players without figures.
const LIST_ROWS: &[&str] = &["did not bat", "yet to bat"];

#[instrument(skip(client, config))]
pub(crate) async fn get_scorecard(
    client: &reqwest::Client,
    config: &ClientConfig,
    match_url: &str,
) -> Result<Extracted<Scorecard>> {
    let url = match_url::to_scorecard_url(match_url, config)?;
    let document = scraper::get_document(client, config, &url).await?;
    let scorecard = parse_scorecard(&document, url)?;
    debug!(
        innings = scorecard.record.innings.len(),
        "parsed scorecard"
    );
    Ok(scorecard)
}

pub(crate) fn parse_scorecard(
    document: &scraper::Html,
    scorecard_url: String,
) -> Result<Extracted<Scorecard>> {
    let title = scraper::page_title(document)?.ok_or(CricketError::Parse {
        expected: "match title",
    })?;

    let status_selector = Selector::parse("div.cb-scrcrd-status")?;
    let result = document
        .select(&status_selector)
        .next()
        .map(|e| element_text(&e))
        .and_then(non_empty);

    let innings_selector = Selector::parse("div[id^=\"innings_\"]")?;
    let innings = document
        .select(&innings_selector)
        .enumerate()
        .map(|(i, block)| parse_innings(&block, i + 1))
        .collect::<Result<Vec<_>>>()?;

    let mut missing = Vec::new();
    if result.is_none() {
        missing.push("result");
    }
    if innings.is_empty() {
        missing.push("innings");
    }

    Ok(Extracted::new(
        Scorecard {
            title,
            result,
            scorecard_url,
            innings,
        },
        missing,
    ))
}

#[derive(Clone, Copy)]
enum Section {
    Batting,
    Bowling,
}

fn parse_innings(block: &ElementRef, number: usize) -> Result<ScorecardInnings> {
    let header_selector = Selector::parse("div.cb-scrd-hdr-rw")?;
    let section_selector = Selector::parse("div.cb-ltst-wgt-hdr")?;
    let sub_header_selector = Selector::parse("div.cb-scrd-sub-hdr")?;
    let row_selector = Selector::parse("div.cb-scrd-itms")?;

    let header = block
        .select(&header_selector)
        .next()
        .map(|h| {
            child_elements(&h)
                .iter()
                .map(element_text)
                .filter(|t| !t.is_empty())
                .collect_vec()
        })
        .unwrap_or_default();
    let label = header
        .first()
        .cloned()
        .unwrap_or_else(|| format!("Innings {number}"));

    let mut innings = ScorecardInnings {
        label,
        total: header.get(1).cloned(),
        extras: None,
        batting: Vec::new(),
        bowling: Vec::new(),
    };

    for section in block.select(&section_selector) {
        let Some(sub_header) = section.select(&sub_header_selector).next() else {
            continue;
        };
        let labels = child_elements(&sub_header).iter().map(element_text).collect_vec();
        let kind = match labels.first().map(String::as_str) {
            Some(first) if first.starts_with("Bat") => Section::Batting,
            Some(first) if first.starts_with("Bowler") => Section::Bowling,
            _ => continue,
        };

        for row in section.select(&row_selector) {
            let cells = child_elements(&row);
            let Some(name) = cells.first().map(element_text).and_then(non_empty) else {
                continue;
            };
            let rest = || cells.iter().skip(1).map(element_text).filter(|t| !t.is_empty()).join(" ");

            match name.to_ascii_lowercase().as_str() {
                "extras" => innings.extras = non_empty(rest()),
                "total" => {
                    if let Some(total) = non_empty(rest()) {
                        innings.total = Some(total);
                    }
                }
                lower if LIST_ROWS.iter().any(|l| lower.starts_with(l)) => {}
                _ => match kind {
                    Section::Batting => innings.batting.push(batting_line(name, &cells, &labels)),
                    Section::Bowling => innings.bowling.push(bowling_line(name, &cells, &labels)),
                },
            }
        }
    }

    Ok(innings)
}

/// Split a trailing role marker such as `(c)`, `(wk)` or `(c & wk)` off a
/// player name.
fn split_role(name: String) -> (String, Option<String>) {
    let marker = name
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once('('))
        .filter(|(player, role)| {
            !player.trim().is_empty()
                && role
                    .split('&')
                    .all(|r| matches!(r.trim().to_ascii_lowercase().as_str(), "c" | "wk" | "vc"))
        })
        .map(|(player, role)| (player.trim_end().to_string(), role.split_whitespace().join(" ")));
    match marker {
        Some((player, role)) => (player, Some(role)),
        None => (name, None),
    }
}

fn batting_line(name: String, cells: &[ElementRef], labels: &[String]) -> BattingLine {
    // The dismissal column is the one left unlabelled after the name.
    let dismissal = labels
        .iter()
        .skip(1)
        .position(String::is_empty)
        .and_then(|i| cells.get(i + 1))
        .map(element_text)
        .and_then(non_empty);

    let (name, role) = split_role(name);
    BattingLine {
        name,
        role,
        dismissal,
        runs: stat(cells, labels, "R"),
        balls: stat(cells, labels, "B"),
        fours: stat(cells, labels, "4s"),
        sixes: stat(cells, labels, "6s"),
        strike_rate: stat(cells, labels, "SR"),
    }
}

fn bowling_line(name: String, cells: &[ElementRef], labels: &[String]) -> BowlingLine {
    let (name, role) = split_role(name);
    BowlingLine {
        name,
        role,
        overs: stat(cells, labels, "O"),
        maidens: stat(cells, labels, "M"),
        runs: stat(cells, labels, "R"),
        wickets: stat(cells, labels, "W"),
        no_balls: stat(cells, labels, "NB"),
        wides: stat(cells, labels, "WD"),
        economy: stat(cells, labels, "ECO"),
    }
}

/// Value of the cell under the column headed `label`.
fn stat(cells: &[ElementRef], labels: &[String], label: &str) -> Option<StatValue> {
    let column = labels.iter().position(|l| l.eq_ignore_ascii_case(label))?;
    cells
        .get(column)
        .and_then(|cell| StatValue::parse(&element_text(cell)))
}
