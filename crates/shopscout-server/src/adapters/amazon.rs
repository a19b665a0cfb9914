//! Amazon search-results scraper.
//!
//! One GET per query with a fixed User-Agent, then a CSS-selector pass over
//! the returned HTML. No retries.

use async_trait::async_trait;
use reqwest::Client;
use shopscout::{
    DomainError, ProductExtractor, ProductSearchService, ResultSelectors, SearchQuery,
    SearchResultItem,
};

use super::ScraperParser;
use crate::config::ServerConfig;

/// ProductSearchService that scrapes an Amazon-style results page
#[derive(Clone)]
pub struct AmazonProductSearch {
    client: Client,
    config: ServerConfig,
    extractor: ProductExtractor,
}

impl AmazonProductSearch {
    pub fn new(config: ServerConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config,
            extractor: ProductExtractor::new(ResultSelectors::amazon()),
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| DomainError::ExternalService(format!("HTTP error: {e}")))?;

        response
            .text()
            .await
            .map_err(|e| DomainError::ExternalService(format!("response read failed: {e}")))
    }
}

#[async_trait]
impl ProductSearchService for AmazonProductSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, DomainError> {
        let url = self.config.search_url(query);
        tracing::debug!(%url, "Fetching search results");

        let body = self.fetch(&url).await.inspect_err(|e| {
            tracing::warn!(query = %query, error = %e, "Search fetch failed");
        })?;

        tracing::debug!(bytes = body.len(), "Search results page received");

        self.extractor.extract_from(&ScraperParser, &body)
    }
}
