use serde::{Deserialize, Serialize};

/// Query parameters of the Meta webhook verification handshake.
#[derive(Debug, Deserialize, Clone)]
pub struct WebhookVerification {
    #[serde(rename = "hub.mode")]
    pub hub_mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub hub_verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub hub_challenge: Option<String>,
}

// ============================================================================
// WEBHOOK EVENT PAYLOAD (entry[].messaging[])
// ============================================================================
// Everything is optional: the platform evolves this payload and a missing
// nested field must never reject an event we already acknowledged.

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WebhookPayload {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Entry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MessagingEvent {
    #[serde(default)]
    pub sender: Option<Party>,
    #[serde(default)]
    pub recipient: Option<Party>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Party {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EventMessage {
    #[serde(default)]
    pub mid: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

// ============================================================================
// GRAPH API SHAPES (comments + cursor pagination)
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<CommentAuthor>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentAuthor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One page of a cursor-paginated Graph response.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommentPage {
    #[serde(default)]
    pub data: Vec<Comment>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Option<Cursors>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Cursors {
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
}
