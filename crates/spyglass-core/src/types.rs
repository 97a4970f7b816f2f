use serde::{Deserialize, Serialize};

/// How deeply the downstream search service should crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

/// A search request forwarded to the downstream search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    pub search_depth: SearchDepth,
    pub include_domains: Option<Vec<String>>,
    pub exclude_domains: Option<Vec<String>>,
}

impl SearchRequest {
    /// A request for `query` with the downstream defaults (5 results, basic depth).
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 5,
            search_depth: SearchDepth::Basic,
            include_domains: None,
            exclude_domains: None,
        }
    }
}

/// A single normalized search result. Missing downstream fields are filled
/// with placeholder defaults before this type is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub content: String,
    pub score: f64,
    pub published_date: Option<String>,
}

/// The outcome of a search call: the result list plus an optional
/// AI-generated answer summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchHit>,
    pub answer: Option<String>,
}

/// A single normalized extraction result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractHit {
    pub url: String,
    pub raw_content: String,
    pub status_code: u16,
}
