use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::NewsItem;
use crate::scraper::{self, select_full_text, select_href};

#[instrument(skip(client, config))]
pub(crate) async fn get_news(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<Vec<NewsItem>> {
    let url = format!("{}/cricket-news", config.base_url);
    let document = scraper::get_document(client, config, &url).await?;
    let news = parse_news(&document, config)?;
    debug!(count = news.len(), "parsed news");
    Ok(news)
}

pub(crate) fn parse_news(document: &scraper::Html, config: &ClientConfig) -> Result<Vec<NewsItem>> {
    let story_selector = Selector::parse("div.cb-nws-lst-rt")?;
    let mut stories = document.select(&story_selector).peekable();
    if stories.peek().is_some() {
        let items = stories
            .map(|story| parse_story(&story, config))
            .collect::<Result<Vec<_>>>()?;
        return Ok(items.into_iter().filter(|item| !item.is_empty()).collect());
    }

    // Older layout: generic column blocks, which nest. Only blocks that do
    // not wrap another story are read, so fields never mix across stories.
    let fallback_selector = Selector::parse("div.cb-col-100.cb-col")?;
    let mut items = Vec::new();
    for block in document.select(&fallback_selector) {
        let wraps_story = block
            .select(&fallback_selector)
            .map(|inner| parse_story(&inner, config))
            .process_results(|mut inner| inner.any(|item| !item.is_empty()))?;
        if wraps_story {
            continue;
        }
        let item = parse_story(&block, config)?;
        if !item.is_empty() {
            items.push(item);
        }
    }
    Ok(items.into_iter().unique().collect())
}

fn parse_story(story: &ElementRef, config: &ClientConfig) -> Result<NewsItem> {
    let headline_selector = Selector::parse("a.cb-nws-hdln, .cb-nws-hdln a")?;
    let description_selector = Selector::parse("div.cb-nws-intr")?;
    let time_selector = Selector::parse("div.cb-nws-time")?;
    let category_selector = Selector::parse(".cb-nws-cat, .cb-nws-lst-cat")?;

    Ok(NewsItem {
        headline: select_full_text(story, &headline_selector),
        description: select_full_text(story, &description_selector),
        timestamp: select_full_text(story, &time_selector),
        category: select_full_text(story, &category_selector),
        url: select_href(story, &headline_selector, config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_news_in_page_order() {
        let document =
            scraper::Html::parse_document(include_str!("../../tests/fixtures/news.html"));
        let news = parse_news(&document, &ClientConfig::default()).unwrap();

        assert_eq!(news.len(), 3);
        assert_eq!(
            news[0].headline.as_deref(),
            Some("Gill, Jaiswal tons put India in command in Delhi")
        );
        assert_eq!(news[0].category.as_deref(), Some("Match Report"));
        assert_eq!(news[0].timestamp.as_deref(), Some("Sat, Oct 18 2025"));
        assert_eq!(
            news[0].url.as_deref(),
            Some("https://www.cricbuzz.com/cricket-news/135900/gill-jaiswal-tons-put-india-in-command-in-delhi")
        );
        // Partial stories keep what they have.
        assert_eq!(news[2].headline.as_deref(), Some("Squad announced for Zimbabwe tour"));
        assert_eq!(news[2].description, None);
        assert_eq!(news[2].category, None);
    }

    #[test]
    fn test_stories_without_any_field_are_skipped() {
        let document = scraper::Html::parse_document(
            r#"<div class="cb-col-100 cb-col">
                 <div class="cb-col-100 cb-col">
                   <a class="cb-nws-hdln" href="/cricket-news/1/a">Headline A</a>
                   <div class="cb-nws-intr">Intro A</div>
                 </div>
                 <div class="cb-col-100 cb-col"><span>advert</span></div>
               </div>"#,
        );
        let news = parse_news(&document, &ClientConfig::default()).unwrap();
        assert_eq!(news.len(), 1);
        assert_eq!(news[0].description.as_deref(), Some("Intro A"));
    }

    #[test]
    fn test_wrapper_blocks_do_not_merge_stories() {
        let document = scraper::Html::parse_document(
            r#"<div class="cb-col-100 cb-col">
                 <div class="cb-col-100 cb-col">
                   <a class="cb-nws-hdln" href="/cricket-news/1/a">Headline A</a>
                 </div>
                 <div class="cb-col-100 cb-col">
                   <a class="cb-nws-hdln" href="/cricket-news/2/b">Headline B</a>
                   <div class="cb-nws-intr">Intro B</div>
                 </div>
               </div>"#,
        );
        let news = parse_news(&document, &ClientConfig::default()).unwrap();

        assert_eq!(news.len(), 2);
        assert_eq!(news[0].headline.as_deref(), Some("Headline A"));
        assert_eq!(news[0].description, None);
        assert_eq!(news[1].headline.as_deref(), Some("Headline B"));
        assert_eq!(news[1].description.as_deref(), Some("Intro B"));
        assert_eq!(
            news[1].url.as_deref(),
            Some("https://www.cricbuzz.com/cricket-news/2/b")
        );
    }
}
