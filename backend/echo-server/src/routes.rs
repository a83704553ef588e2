use crate::{get_tenant_id, health, reflect_headers};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router() -> Router {
    Router::new()
        // Claim extraction and header reflection
        .route("/", get(get_tenant_id))
        .route("/headers", get(reflect_headers))
        // Health check
        .route("/health", get(health::health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
