use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod models;
pub mod services;
pub mod state;
pub mod webhook;

use api::create_api_router;
use state::AppState;
use webhook::{get_webhook, post_webhook, root};

/// CORS layer built from the configured origin allowlist.
/// An empty allowlist keeps the layer permissive (local/dev usage).
fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    }
}

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    let cors = cors_layer(&app_state.allowed_origins);

    Router::new()
        // Liveness probe
        .route("/", get(root))
        // Messenger platform webhooks (handshake + events)
        .route("/webhook", get(get_webhook).post(post_webhook))
        // Operator API
        .merge(create_api_router())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
