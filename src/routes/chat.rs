use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::{
    error::AppError,
    message::{ChatPayload, ChatReply, ChatRequest, StatusResponse},
    services::relay::relay,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatPayload>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected chat payload");
        AppError::Validation(rejection.body_text())
    })?;
    let request = ChatRequest::try_from(payload)?;

    let reply = relay(state.reply_source.as_ref(), &request, state.reply_timeout).await?;
    Ok(Json(reply))
}

pub async fn status_handler(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        bot_name: state.bot_name.clone(),
        reply_source: state.reply_source.name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
