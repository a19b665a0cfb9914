use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use shopscout::ProductSearchService;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod config;
mod models;
mod routes;

#[cfg(test)]
mod test_utils;

use adapters::AmazonProductSearch;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn ProductSearchService>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is running", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "ShopScout API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble routes, docs and middleware around the shared state
fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::search::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🛒 ShopScout API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))
        .context("Invalid server configuration")?;

    tracing::info!(
        "⚙️  Searching {} (timeout {:?})",
        config.search_base_url,
        config.request_timeout
    );

    let search = AmazonProductSearch::new(config).context("Failed to initialize search")?;

    let state = AppState {
        search: Arc::new(search),
    };

    let router = app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ ShopScout API ready");

    Ok(router.into())
}
