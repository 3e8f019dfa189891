pub mod comments;
pub mod common;
pub mod logs;
pub mod private_replies;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

/// Operator-facing API: enumerate comments, run a bulk private-reply
/// dispatch, read back the audit log.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(comments::create_comments_router())
        .merge(private_replies::create_private_replies_router())
        .merge(logs::create_logs_router())
}
