use async_trait::async_trait;

use crate::error::Error;
use crate::types::{ExtractHit, SearchOutcome, SearchRequest};

/// Client for the downstream search/extract service.
///
/// Implementations authenticate each call with the key handed to them; the
/// gateway draws a fresh key from the credential pool per invocation.
#[async_trait]
pub trait TavilyApi: Send + Sync {
    /// Run a web search and return the normalized results.
    async fn search(&self, api_key: &str, request: &SearchRequest) -> Result<SearchOutcome, Error>;

    /// Extract page content from each of the given URLs.
    async fn extract(&self, api_key: &str, urls: &[String]) -> Result<Vec<ExtractHit>, Error>;
}
