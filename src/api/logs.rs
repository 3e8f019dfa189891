use crate::api::common::{ApiFailure, DataEnvelope};
use crate::db::reply_log_store::RECENT_LIMIT;
use crate::models::ReplyLog;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tracing::error;

/// GET /api/logs: recent dispatch records, newest first, capped at 500.
pub async fn list_logs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<Vec<ReplyLog>>>, ApiFailure> {
    let logs = state.reply_log.recent(RECENT_LIMIT).await.map_err(|e| {
        error!("failed to read reply logs: {e}");
        ApiFailure::internal("failed to read reply logs")
    })?;

    Ok(Json(DataEnvelope::new(logs)))
}

pub fn create_logs_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/logs", get(list_logs))
}
