//! Product Search Service Port
//!
//! Abstract interface for fetching and extracting search results.

use async_trait::async_trait;

use crate::domain::entities::SearchResultItem;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::SearchQuery;

/// Service interface for product search operations
#[async_trait]
pub trait ProductSearchService: Send + Sync {
    /// Fetch the results page for a query and extract its items
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, DomainError>;
}
