use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{CricketError, Result};
use crate::model::{Extracted, Format, RankingCategory, RankingEntry, Rankings};
use crate::scraper::{self, child_elements, element_text, non_empty, select_full_text};

#[instrument(skip(client, config), fields(category = %category))]
pub(crate) async fn get_rankings(
    client: &reqwest::Client,
    config: &ClientConfig,
    category: RankingCategory,
) -> Result<Extracted<Rankings>> {
    let url = format!(
        "{}/cricket-stats/icc-rankings/men/{category}",
        config.base_url
    );
    let document = scraper::get_document(client, config, &url).await?;
    let rankings = parse_rankings(&document, category)?;
    debug!(
        test = rankings.record.test.len(),
        odi = rankings.record.odi.len(),
        t20 = rankings.record.t20.len(),
        "parsed rankings"
    );
    Ok(rankings)
}

pub(crate) fn parse_rankings(
    document: &scraper::Html,
    category: RankingCategory,
) -> Result<Extracted<Rankings>> {
    let mut missing = Vec::new();
    let mut found = 0;
    let mut groups = Vec::with_capacity(3);

    for (format, notice) in [
        (Format::Test, "Test table"),
        (Format::Odi, "ODI table"),
        (Format::T20, "T20 table"),
    ] {
        match parse_table(document, category, format)? {
            Some(entries) => {
                found += 1;
                groups.push(entries);
            }
            None => {
                missing.push(notice);
                groups.push(Vec::new());
            }
        }
    }

    if found == 0 {
        return Err(CricketError::Parse {
            expected: "ICC ranking tables",
        });
    }

    let (test, odi, t20) = groups
        .into_iter()
        .collect_tuple()
        .ok_or(CricketError::Parse {
            expected: "ICC ranking tables",
        })?;

    Ok(Extracted::new(
        Rankings {
            category,
            test,
            odi,
            t20,
        },
        missing,
    ))
}

/// The table for one format is the block whose `ng-show` names
/// `'{prefix}-{tests|odis|t20s}'`.
fn parse_table(
    document: &scraper::Html,
    category: RankingCategory,
    format: Format,
) -> Result<Option<Vec<RankingEntry>>> {
    let token = match format {
        Format::Test => "tests",
        Format::Odi => "odis",
        Format::T20 => "t20s",
    };
    let table_selector = Selector::parse(&format!(
        "[ng-show*=\"'{}-{token}'\"]",
        category.table_prefix()
    ))?;
    let Some(table) = document.select(&table_selector).next() else {
        return Ok(None);
    };

    let row_selector = Selector::parse("div.cb-lst-itm")?;
    let entries = table
        .select(&row_selector)
        .map(|row| parse_row(&row, category))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();
    Ok(Some(entries))
}

/// Rows whose first cell is not a position (column headings) yield `None`.
fn parse_row(row: &ElementRef, category: RankingCategory) -> Result<Option<RankingEntry>> {
    let cells = child_elements(row);
    let Some(position) = cells
        .first()
        .and_then(|cell| parse_number(&element_text(cell)))
        .filter(|position| *position > 0)
    else {
        return Ok(None);
    };

    let link_selector = Selector::parse("a")?;
    let country_selector = Selector::parse(".text-gray")?;

    let name = select_full_text(row, &link_selector)
        .or_else(|| cells.get(1).map(element_text).and_then(non_empty));
    let Some(name) = name else {
        debug!(position, "skipping ranking row without a name");
        return Ok(None);
    };
    let country = select_full_text(row, &country_selector).filter(|c| *c != name);

    let numbers = cells
        .iter()
        .skip(2)
        .filter_map(|cell| parse_number(&element_text(cell)))
        .collect_vec();

    let (matches, points, rating) = match category {
        RankingCategory::Teams if numbers.len() >= 3 => {
            (Some(numbers[0]), Some(numbers[1]), numbers.last().copied())
        }
        _ => (None, None, numbers.last().copied()),
    };

    Ok(Some(RankingEntry {
        position,
        name,
        country,
        rating,
        matches,
        points,
    }))
}

/// Parse a whole number, tolerating thousands separators (`4,880`).
fn parse_number(text: &str) -> Option<u32> {
    text.trim().replace(',', "").parse().ok()
}
