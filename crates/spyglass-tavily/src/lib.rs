use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use spyglass_core::error::Error;
use spyglass_core::traits::TavilyApi;
use spyglass_core::types::{ExtractHit, SearchDepth, SearchHit, SearchOutcome, SearchRequest};

/// Production base URL of the Tavily API.
pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// HTTP client for the Tavily search and extract endpoints.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    http: reqwest::Client,
    base_url: String,
}

impl TavilyClient {
    /// Create a client against `base_url` with a per-request deadline.
    ///
    /// The timeout bounds worst-case latency of a hung downstream call; on
    /// expiry the call fails like any other downstream error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, Error> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::ToolExecution(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ToolExecution(format!("Tavily API error: {status}")));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| Error::ToolExecution(format!("invalid Tavily response: {e}")))
    }
}

#[async_trait]
impl TavilyApi for TavilyClient {
    async fn search(&self, api_key: &str, request: &SearchRequest) -> Result<SearchOutcome, Error> {
        tracing::debug!(query = %request.query, depth = ?request.search_depth, "Tavily search");

        let body = SearchBody {
            api_key,
            query: &request.query,
            max_results: request.max_results,
            search_depth: request.search_depth,
            include_answer: true,
            include_images: false,
            include_raw_content: false,
            include_domains: request.include_domains.as_deref(),
            exclude_domains: request.exclude_domains.as_deref(),
        };

        let raw: RawSearchResponse = self.post_json("/search", &body).await?;
        Ok(SearchOutcome {
            results: raw.results.into_iter().map(SearchHit::from).collect(),
            answer: raw.answer,
        })
    }

    async fn extract(&self, api_key: &str, urls: &[String]) -> Result<Vec<ExtractHit>, Error> {
        tracing::debug!(count = urls.len(), "Tavily extract");

        let body = ExtractBody { api_key, urls };
        let raw: RawExtractResponse = self.post_json("/extract", &body).await?;
        Ok(raw.results.into_iter().map(ExtractHit::from).collect())
    }
}

#[derive(Serialize)]
struct SearchBody<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    search_depth: SearchDepth,
    include_answer: bool,
    include_images: bool,
    include_raw_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_domains: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_domains: Option<&'a [String]>,
}

#[derive(Serialize)]
struct ExtractBody<'a> {
    api_key: &'a str,
    urls: &'a [String],
}

/// Wire shape of a search response; every field may be absent.
#[derive(Debug, Default, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    results: Vec<RawSearchHit>,
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSearchHit {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    published_date: Option<String>,
}

impl From<RawSearchHit> for SearchHit {
    fn from(raw: RawSearchHit) -> Self {
        Self {
            title: raw.title.unwrap_or_else(|| "untitled".to_string()),
            url: raw.url.unwrap_or_default(),
            content: raw.content.unwrap_or_else(|| "no content".to_string()),
            score: raw.score.unwrap_or(0.0),
            published_date: raw.published_date,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawExtractResponse {
    #[serde(default)]
    results: Vec<RawExtractHit>,
}

#[derive(Debug, Default, Deserialize)]
struct RawExtractHit {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    raw_content: Option<String>,
    #[serde(default)]
    status_code: Option<u16>,
}

impl From<RawExtractHit> for ExtractHit {
    fn from(raw: RawExtractHit) -> Self {
        Self {
            url: raw.url.unwrap_or_default(),
            raw_content: raw.raw_content.unwrap_or_else(|| "no content".to_string()),
            status_code: raw.status_code.unwrap_or(0),
        }
    }
}
