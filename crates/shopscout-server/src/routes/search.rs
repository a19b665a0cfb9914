//! Search Routes - Product search via page scraping

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use shopscout::SearchQuery;

use crate::models::{api_error, ApiError, ErrorResponse, ProductResponse, SearchParams};
use crate::AppState;

/// Search products
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Products found on the results page (may be empty)", body = Vec<ProductResponse>),
        (status = 400, description = "Query parameter missing or empty", body = ErrorResponse),
        (status = 500, description = "Fetching or parsing the results page failed", body = ErrorResponse)
    ),
    tag = "Search"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let params = SearchParams::from_pairs(pairs);
    let query = SearchQuery::parse(params.query.as_deref()).map_err(api_error)?;

    let items = state.search.search(&query).await.map_err(|e| {
        tracing::error!("❌ Search failed for '{}': {}", query, e);
        api_error(e)
    })?;

    tracing::info!("🔍 Search: {} -> {} products", query, items.len());

    Ok(Json(items.into_iter().map(ProductResponse::from).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/search", get(search_products))
}
