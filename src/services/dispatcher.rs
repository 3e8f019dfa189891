// ============================================================================
// DISPATCHER - bulk private replies with per-item outcome tracking
// ============================================================================

use crate::db::ReplyLogStore;
use crate::models::{NewReplyLog, ReplyStatus};
use crate::services::graph_client::{GraphApi, GraphError};
use crate::services::paginator::CommentPager;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// Fixed pause between consecutive reply sends. Deliberately slow: bursts
/// of sends trip the platform's abuse detection.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Serialize, Clone)]
pub struct ReplyOutcome {
    pub comment_id: String,
    pub status: ReplyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

/// Aggregate of one bulk-reply run, in comment order.
#[derive(Debug, Serialize, Default)]
pub struct DispatchResult {
    pub sent: u32,
    pub failed: u32,
    pub details: Vec<ReplyOutcome>,
}

pub struct Dispatcher<'a> {
    graph: &'a dyn GraphApi,
    reply_log: &'a dyn ReplyLogStore,
    delay: Duration,
}

impl<'a> Dispatcher<'a> {
    pub fn new(graph: &'a dyn GraphApi, reply_log: &'a dyn ReplyLogStore, delay: Duration) -> Self {
        Self {
            graph,
            reply_log,
            delay,
        }
    }

    /// Send one private reply per comment on `post_id`, best-effort.
    ///
    /// A failing send is recorded and never aborts the remaining comments.
    /// A pagination failure aborts the whole run with `Err`: the comment
    /// set itself is unknown at that point, so no partial aggregate is
    /// returned. Zero comments is a normal quiescent case.
    pub async fn dispatch_private_replies(
        &self,
        post_id: &str,
        message: &str,
    ) -> Result<DispatchResult, GraphError> {
        let mut pager = CommentPager::new(
            self.graph,
            &format!("{post_id}/comments"),
            vec![("fields".to_string(), "id".to_string())],
        );

        let mut result = DispatchResult::default();

        while let Some(batch) = pager.next_batch().await? {
            for comment in batch {
                match self.graph.send_private_reply(&comment.id, message).await {
                    Ok(_) => {
                        result.sent += 1;
                        result.details.push(ReplyOutcome {
                            comment_id: comment.id.clone(),
                            status: ReplyStatus::Sent,
                            error: None,
                        });
                        self.record(post_id, &comment.id, message, ReplyStatus::Sent, None)
                            .await;
                    }
                    Err(e) => {
                        let detail = e.detail();
                        warn!(
                            "private reply to comment {} failed: {}",
                            comment.id, detail
                        );
                        result.failed += 1;
                        result.details.push(ReplyOutcome {
                            comment_id: comment.id.clone(),
                            status: ReplyStatus::Failed,
                            error: Some(detail.clone()),
                        });
                        self.record(
                            post_id,
                            &comment.id,
                            message,
                            ReplyStatus::Failed,
                            Some(detail.to_string()),
                        )
                        .await;
                    }
                }

                // Per-comment throttle, applied after every attempt.
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(
            "✅ bulk reply run for post {} finished: {} sent, {} failed",
            post_id, result.sent, result.failed
        );
        Ok(result)
    }

    /// Audit writes are best-effort: a failed append must not block the
    /// dispatch aggregate for that item.
    async fn record(
        &self,
        post_id: &str,
        comment_id: &str,
        message: &str,
        status: ReplyStatus,
        error: Option<String>,
    ) {
        let entry = NewReplyLog::private_reply(post_id, comment_id, message, status, error);
        if let Err(e) = self.reply_log.append(entry).await {
            warn!("⚠️ failed to append reply log for comment {comment_id}: {e}");
        }
    }
}
