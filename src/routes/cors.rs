// src/routes/cors.rs
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// CORS policy for the frontend. An empty list allows any origin, which
/// suits local development only.
pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        warn!("no allowed origins configured; accepting cross-origin requests from anywhere");
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed_origins.to_vec())
    }
}
