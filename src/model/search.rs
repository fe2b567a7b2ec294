use std::iter::FusedIterator;

use serde::Serialize;

/// A single web search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Search hits in rank order. Consumed once; never re-queries the provider.
#[derive(Debug)]
pub struct SearchResults {
    inner: std::vec::IntoIter<SearchResult>,
}

impl SearchResults {
    pub(crate) fn new(results: Vec<SearchResult>) -> Self {
        Self {
            inner: results.into_iter(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Iterator for SearchResults {
    type Item = SearchResult;

    fn next(&mut self) -> Option<SearchResult> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SearchResults {}

impl FusedIterator for SearchResults {}
