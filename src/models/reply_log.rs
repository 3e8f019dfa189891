use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// REPLY AUDIT LOG MODELS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Sent,
    Failed,
}

impl ReplyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyStatus::Sent => "sent",
            ReplyStatus::Failed => "failed",
        }
    }
}

impl TryFrom<String> for ReplyStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "sent" => Ok(ReplyStatus::Sent),
            "failed" => Ok(ReplyStatus::Failed),
            other => Err(format!("unknown reply status: {other}")),
        }
    }
}

/// One stored dispatch-attempt record. Insert-only: rows are never updated
/// or deleted by this service.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ReplyLog {
    pub id: i64,
    #[serde(rename = "type")]
    pub log_type: String,
    pub post_id: Option<String>,
    pub comment_id: Option<String>,
    pub psid: Option<String>,
    pub message: String,
    #[sqlx(try_from = "String")]
    pub status: ReplyStatus,
    /// Serialized error detail, present iff status = failed.
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape: id and created_at are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReplyLog {
    pub log_type: String,
    pub post_id: Option<String>,
    pub comment_id: Option<String>,
    pub psid: Option<String>,
    pub message: String,
    pub status: ReplyStatus,
    pub error: Option<String>,
}

impl NewReplyLog {
    /// Record for one private-reply attempt against a comment.
    pub fn private_reply(
        post_id: &str,
        comment_id: &str,
        message: &str,
        status: ReplyStatus,
        error: Option<String>,
    ) -> Self {
        Self {
            log_type: "private_reply".to_string(),
            post_id: Some(post_id.to_string()),
            comment_id: Some(comment_id.to_string()),
            psid: None,
            message: message.to_string(),
            status,
            error,
        }
    }
}
