// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorResponse;
use crate::services::reply_source::ReplySourceError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input. The message is shown to the caller as is.
    #[error("{0}")]
    Validation(String),

    /// The reply source did not answer within the configured budget.
    #[error("reply source timed out")]
    UpstreamTimeout,

    /// The reply source answered with a failure.
    #[error("reply source failed: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Validation(m) => m.clone(),
            AppError::UpstreamTimeout => "the reply source took too long to answer".to_string(),
            AppError::Upstream(detail) => {
                error!(error = %detail, "reply source error");
                "the reply source is unavailable".to_string()
            }
            AppError::Internal(detail) => {
                error!(error = %detail, "internal server error");
                "internal server error".to_string()
            }
        }
    }
}

impl From<ReplySourceError> for AppError {
    fn from(err: ReplySourceError) -> Self {
        match err {
            ReplySourceError::Timeout => AppError::UpstreamTimeout,
            ReplySourceError::Unavailable(reason) => AppError::Upstream(reason),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.client_message(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
