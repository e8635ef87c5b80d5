pub mod client;
pub mod health;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::state::AppState;
use crate::video::handlers;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(client::index_handler))
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/extract-options",
            post(handlers::handle_extract_options),
        )
        .route("/api/enhance-prompt", post(handlers::handle_enhance_prompt))
        .route(
            "/api/generate-script",
            post(handlers::handle_generate_script),
        )
        .with_state(state)
        .layer(cors)
}

/// CORS restricted to the configured origin allow-list, with credentials.
/// Requests without an `Origin` header pass through untouched.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {o}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
