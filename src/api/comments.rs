use crate::api::common::{ApiFailure, DataEnvelope};
use crate::models::Comment;
use crate::services::paginator::CommentPager;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

/// GET /api/posts/:post_id/comments: every comment on the post,
/// accumulated across all pages.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Result<Json<DataEnvelope<Vec<Comment>>>, ApiFailure> {
    let pager = CommentPager::new(
        state.graph.as_ref(),
        &format!("{post_id}/comments"),
        vec![("fields".to_string(), "id,message,from".to_string())],
    );

    let comments = pager.collect_all().await.map_err(ApiFailure::from_graph)?;
    info!("fetched {} comments for post {}", comments.len(), post_id);

    Ok(Json(DataEnvelope::new(comments)))
}

pub fn create_comments_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/posts/:post_id/comments", get(list_comments))
}
