use ::scraper::{CaseSensitivity, ElementRef, Selector};
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{CricketError, Result};
use crate::match_url;
use crate::model::{Commentary, CommentaryEvent, Extracted};
use crate::scraper::{self, element_text, non_empty};

#[instrument(skip(client, config))]
pub(crate) async fn get_commentary(
    client: &reqwest::Client,
    config: &ClientConfig,
    match_url: &str,
    limit: usize,
) -> Result<Extracted<Commentary>> {
    let url = match_url::to_commentary_url(match_url, config)?;
    let document = scraper::get_document(client, config, &url).await?;
    let commentary = parse_commentary(&document, url, limit)?;
    debug!(events = commentary.record.events.len(), "parsed commentary");
    Ok(commentary)
}

/// Newest-first commentary lines, at most `limit` of them.
pub(crate) fn parse_commentary(
    document: &scraper::Html,
    commentary_url: String,
    limit: usize,
) -> Result<Extracted<Commentary>> {
    let title = scraper::page_title(document)?.ok_or(CricketError::Parse {
        expected: "match title",
    })?;

    let line_selector = Selector::parse("p.cb-com-ln")?;
    let mut lines = document.select(&line_selector).peekable();
    let missing = if lines.peek().is_none() {
        vec!["commentary"]
    } else {
        Vec::new()
    };

    let events = lines
        .filter_map(|line| {
            let text = non_empty(element_text(&line))?;
            Some(CommentaryEvent {
                over: ball_marker(&line),
                text,
            })
        })
        .take(limit)
        .collect();

    Ok(Extracted::new(
        Commentary {
            title,
            commentary_url,
            events,
        },
        missing,
    ))
}

/// The `cb-ovr-num` marker sharing a parent with the line, if any.
fn ball_marker(line: &ElementRef) -> Option<String> {
    let parent = line.parent().and_then(ElementRef::wrap)?;
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().has_class("cb-ovr-num", CaseSensitivity::CaseSensitive))
        .map(|e| element_text(&e))
        .and_then(non_empty)
}
