// src/routes/mod.rs
pub mod chat;
pub mod cors;

use std::any::Any;

use crate::{error::AppError, state::SharedState};
use axum::{
    Router,
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::{chat_handler, status_handler};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(status_handler))
        .route("/health", get(|| async { "OK" }))
        .route("/chat", post(chat_handler))
        .route("/chatbot", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}

/// Full application: routes, state, panic guard and CORS. CORS sits
/// outermost so error responses carry the headers too.
pub fn build_app(state: SharedState, allowed_origins: &[HeaderValue]) -> Router {
    create_router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors::cors_layer(allowed_origins))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
