// src/services/relay.rs
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::AppError;
use crate::message::{ChatReply, ChatRequest};
use crate::services::reply_source::ReplySource;

/// Forwards a validated request to `source` and hands its reply back
/// unchanged. The call is abandoned once `budget` elapses.
pub async fn relay(
    source: &dyn ReplySource,
    request: &ChatRequest,
    budget: Duration,
) -> Result<ChatReply, AppError> {
    let started = Instant::now();
    let outcome = tokio::time::timeout(budget, source.reply(request.message())).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let reply = match outcome {
        Err(_elapsed) => {
            warn!(
                source = source.name(),
                budget_ms = budget.as_millis() as u64,
                "reply source exceeded its time budget"
            );
            return Err(AppError::UpstreamTimeout);
        }
        Ok(Err(err)) => {
            warn!(source = source.name(), latency_ms, error = %err, "reply source failed");
            return Err(err.into());
        }
        Ok(Ok(reply)) => reply,
    };

    if reply.trim().is_empty() {
        return Err(AppError::Internal(format!(
            "reply source `{}` returned an empty reply",
            source.name()
        )));
    }

    debug!(source = source.name(), latency_ms, reply_len = reply.len(), "relayed reply");
    Ok(ChatReply { reply })
}
