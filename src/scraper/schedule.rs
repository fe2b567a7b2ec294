use ::scraper::{CaseSensitivity, ElementRef, Selector};
use chrono::NaiveDate;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::ScheduledMatch;
use crate::scraper::{self, element_text, non_empty, select_full_text, select_href, select_text};

const SCHEDULE_DATE_FORMAT: &str = "%a, %b %d %Y";
const SCHEDULE_DATE_FORMAT_ALT: &str = "%A, %B %d %Y";

#[instrument(skip(client, config))]
pub(crate) async fn get_schedule(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<Vec<ScheduledMatch>> {
    let url = format!(
        "{}/cricket-schedule/upcoming-series/international",
        config.base_url
    );
    let document = scraper::get_document(client, config, &url).await?;
    let schedule = parse_schedule(&document, config)?;
    debug!(count = schedule.len(), "parsed schedule");
    Ok(schedule)
}

/// Day blocks are headed by a date strip; every sibling after the strip, up to
/// the next strip, belongs to that day.
pub(crate) fn parse_schedule(
    document: &scraper::Html,
    config: &ClientConfig,
) -> Result<Vec<ScheduledMatch>> {
    let strip_selector = Selector::parse("div.cb-lv-grn-strip")?;
    let row_selector = Selector::parse("div.cb-mtchs-dy-vnu")?;

    let mut schedule = Vec::new();
    for strip in document.select(&strip_selector) {
        let date = element_text(&strip);
        if date.is_empty() {
            continue;
        }
        let date_parsed = parse_date(&date);

        let day = strip
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .take_while(|e| !is_strip(e))
            .collect_vec();

        let rows = day.iter().flat_map(|e| e.select(&row_selector)).collect_vec();
        if rows.is_empty() {
            let description = day.iter().map(element_text).filter(|t| !t.is_empty()).join(" ");
            if description.is_empty() {
                warn!(date, "skipping empty schedule day");
                continue;
            }
            schedule.push(ScheduledMatch {
                date: date.clone(),
                date_parsed,
                series: None,
                title: None,
                venue: None,
                start_time: None,
                url: None,
                description,
            });
            continue;
        }

        for row in rows {
            schedule.push(parse_row(&row, &date, date_parsed, config)?);
        }
    }
    Ok(schedule)
}

fn parse_row(
    row: &ElementRef,
    date: &str,
    date_parsed: Option<NaiveDate>,
    config: &ClientConfig,
) -> Result<ScheduledMatch> {
    let link_selector = Selector::parse("a")?;
    let venue_selector = Selector::parse(".text-gray")?;
    let series_selector = Selector::parse("a")?;

    let title = select_full_text(row, &link_selector);
    let url = select_href(row, &link_selector, config);
    let venue = select_full_text(row, &venue_selector);

    let start_time = row
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| has_class(e, "cb-mtchs-dy-tm"))
        .map(|e| e.text().map(str::trim).find(|t| !t.is_empty()).unwrap_or_default().to_string())
        .and_then(non_empty);

    // The series cell sits beside the column holding this row.
    let series = row
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find_map(|ancestor| {
            ancestor
                .prev_siblings()
                .filter_map(ElementRef::wrap)
                .find(|e| has_class(e, "cb-mtchs-dy"))
        })
        .map(|cell| select_text(&cell, &series_selector))
        .and_then(non_empty);

    let description = [title.as_deref(), venue.as_deref(), start_time.as_deref()]
        .into_iter()
        .flatten()
        .join(" - ");

    Ok(ScheduledMatch {
        date: date.to_string(),
        date_parsed,
        series,
        title,
        venue,
        start_time,
        url,
        description,
    })
}

fn is_strip(element: &ElementRef) -> bool {
    has_class(element, "cb-lv-grn-strip")
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element
        .value()
        .has_class(class, CaseSensitivity::CaseSensitive)
}

/// Parse a date strip such as `SAT, OCT 18 2025`.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, SCHEDULE_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(text, SCHEDULE_DATE_FORMAT_ALT))
        .ok()
}
