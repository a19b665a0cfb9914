//! ShopScout API Routes
//!
//! - /api/search - Product search (scrapes the results page)
//! - /swagger-ui - OpenAPI documentation

pub mod search;
pub mod swagger;
