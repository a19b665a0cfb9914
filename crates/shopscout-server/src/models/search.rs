//! Product search request/response DTOs

use serde::Serialize;
use shopscout::SearchResultItem;
use utoipa::{IntoParams, ToSchema};

/// Query string of `GET /api/search`
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search text; spaces are allowed
    pub query: Option<String>,
}

impl SearchParams {
    /// Decoded query-string pairs; a repeated `query` keeps its first value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value);
        Self { query }
    }
}

/// One product from the search-results page
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = "Anker 4-Port USB 3.0 Hub")]
    pub product_name: String,
    /// Displayed price, or "N/A"
    #[schema(example = "$19.99")]
    pub price: String,
    #[schema(example = "4.7 out of 5 stars")]
    pub rating: String,
    /// Availability note, or "N/A"
    #[schema(example = "In Stock")]
    pub availability: String,
}

impl From<SearchResultItem> for ProductResponse {
    fn from(item: SearchResultItem) -> Self {
        Self {
            product_name: item.product_name,
            price: item.price,
            rating: item.rating,
            availability: item.availability,
        }
    }
}
