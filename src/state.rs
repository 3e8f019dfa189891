use crate::db::{MemoryReplyLogStore, PgReplyLogStore, ReplyLogStore};
use crate::services::dispatcher::DEFAULT_REPLY_DELAY;
use crate::services::graph_client::{GraphApi, GraphClient};
use axum::http::HeaderValue;
use std::env;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state: configuration plus the injected outbound
/// capabilities (Graph API client and audit log store). Both are trait
/// objects so handlers and services stay testable against fakes.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<dyn GraphApi>,
    pub reply_log: Arc<dyn ReplyLogStore>,
    pub verify_token: String,
    pub app_secret: String,
    pub reply_delay: Duration,
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let access_token = env::var("PAGE_ACCESS_TOKEN")
            .map_err(|e| anyhow::anyhow!("PAGE_ACCESS_TOKEN must be set: {}", e))?;
        let verify_token = env::var("VERIFY_TOKEN")
            .map_err(|e| anyhow::anyhow!("VERIFY_TOKEN must be set: {}", e))?;

        let app_secret = env::var("APP_SECRET").unwrap_or_default();
        if app_secret.is_empty() {
            tracing::warn!("⚠️ APP_SECRET not set, webhook signature verification is DISABLED");
        }

        let graph_version = env::var("GRAPH_VERSION").unwrap_or_else(|_| "v21.0".to_string());
        let graph_base_url = env::var("GRAPH_API_BASE_URL")
            .unwrap_or_else(|_| "https://graph.facebook.com".to_string());
        let graph: Arc<dyn GraphApi> =
            Arc::new(GraphClient::new(&graph_base_url, &graph_version, &access_token)?);

        let reply_log: Arc<dyn ReplyLogStore> = match env::var("DATABASE_URL") {
            Ok(url) => Arc::new(PgReplyLogStore::connect(&url).await?),
            Err(_) => {
                tracing::warn!(
                    "⚠️ DATABASE_URL not set, reply audit log is in-memory only"
                );
                Arc::new(MemoryReplyLogStore::default())
            }
        };

        let reply_delay = env::var("PRIVATE_REPLY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REPLY_DELAY);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("ignoring invalid origin in ALLOWED_ORIGINS: {o}");
                    None
                }
            })
            .collect();

        Ok(Self {
            graph,
            reply_log,
            verify_token,
            app_secret,
            reply_delay,
            allowed_origins,
        })
    }

    /// Assemble a state from explicit parts. Integration tests use this to
    /// point the service at a mock Graph server and an in-memory log.
    pub fn with_parts(
        graph: Arc<dyn GraphApi>,
        reply_log: Arc<dyn ReplyLogStore>,
        verify_token: &str,
        app_secret: &str,
        reply_delay: Duration,
    ) -> Self {
        Self {
            graph,
            reply_log,
            verify_token: verify_token.to_string(),
            app_secret: app_secret.to_string(),
            reply_delay,
            allowed_origins: Vec::new(),
        }
    }
}
