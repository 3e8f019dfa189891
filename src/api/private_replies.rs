use crate::api::common::ApiFailure;
use crate::services::dispatcher::{Dispatcher, ReplyOutcome};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct PrivateReplyRequest {
    pub post_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PrivateReplyResponse {
    pub ok: bool,
    pub sent: u32,
    pub failed: u32,
    pub details: Vec<ReplyOutcome>,
}

/// POST /api/private-replies: one private reply per commenter on the post.
/// Field validation happens before any remote call or log write.
pub async fn send_private_replies(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PrivateReplyRequest>,
) -> Result<Json<PrivateReplyResponse>, ApiFailure> {
    let post_id = required_field(&request.post_id, "post_id")?;
    let message = required_field(&request.message, "message")?;

    info!("📣 bulk private-reply dispatch requested for post {post_id}");

    let dispatcher = Dispatcher::new(
        state.graph.as_ref(),
        state.reply_log.as_ref(),
        state.reply_delay,
    );
    let result = dispatcher
        .dispatch_private_replies(post_id, message)
        .await
        .map_err(ApiFailure::from_graph)?;

    Ok(Json(PrivateReplyResponse {
        ok: true,
        sent: result.sent,
        failed: result.failed,
        details: result.details,
    }))
}

fn required_field<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, ApiFailure> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiFailure::bad_request(&format!("{name} is required")))
}

pub fn create_private_replies_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/private-replies", post(send_private_replies))
}
