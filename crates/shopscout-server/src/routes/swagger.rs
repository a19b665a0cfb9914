//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorResponse, ProductResponse};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::search::search_products,
    ),
    info(
        title = "ShopScout API",
        description = "Scrapes an e-commerce search-results page and returns its products as JSON.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Search", description = "Search - Product listings scraped from the results page"),
    ),
    components(
        schemas(
            HealthCheck,
            ProductResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
