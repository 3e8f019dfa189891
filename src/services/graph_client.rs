// ============================================================================
// GRAPH API CLIENT - outbound calls to the Messenger platform
// ============================================================================

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The platform answered with a non-2xx status. The structured
    /// `{"error": {...}}` body is preserved for audit logging.
    #[error("Graph API error (status {status}): {body}")]
    Api { status: u16, body: Value },

    #[error("Graph API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected Graph API response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

impl GraphError {
    /// Structured error detail for per-item results and log rows.
    /// Prefers the platform's own error object when one is available.
    pub fn detail(&self) -> Value {
        match self {
            GraphError::Api { body, .. } => body
                .get("error")
                .cloned()
                .unwrap_or_else(|| body.clone()),
            other => json!({ "message": other.to_string() }),
        }
    }
}

/// Outbound HTTP capability consumed by the paginator and dispatcher.
/// Injected through `AppState` so both stay testable against a mock server.
#[async_trait]
pub trait GraphApi: Send + Sync {
    async fn get_json(&self, url: &str, params: &[(String, String)]) -> Result<Value, GraphError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, GraphError>;

    /// Send a private reply addressed to a public comment's author.
    async fn send_private_reply(
        &self,
        comment_id: &str,
        message: &str,
    ) -> Result<Value, GraphError> {
        let body = json!({
            "recipient": { "comment_id": comment_id },
            "messaging_type": "RESPONSE",
            "message": { "text": message },
        });
        self.post_json("me/messages", &body).await
    }
}

pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GraphClient {
    pub fn new(base_url: &str, graph_version: &str, access_token: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/{}", base_url.trim_end_matches('/'), graph_version),
            access_token: access_token.to_string(),
        })
    }

    /// Cursor chains hand back absolute `paging.next` URLs; everything else
    /// is a path relative to the versioned base.
    fn endpoint(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http") {
            path_or_url.to_string()
        } else {
            format!("{}/{}", self.base_url, path_or_url.trim_start_matches('/'))
        }
    }

    async fn read_response(response: reqwest::Response) -> Result<Value, GraphError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Value>().await?)
        } else {
            let body = response
                .json::<Value>()
                .await
                .unwrap_or_else(|e| json!({ "message": e.to_string() }));
            Err(GraphError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl GraphApi for GraphClient {
    async fn get_json(&self, url: &str, params: &[(String, String)]) -> Result<Value, GraphError> {
        let response = self
            .http
            .get(self.endpoint(url))
            .query(params)
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, GraphError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .query(&[("access_token", self.access_token.as_str())])
            .json(body)
            .send()
            .await?;
        Self::read_response(response).await
    }
}
