// ============================================================================
// REPLY LOG STORE - append-only audit sink with bounded read-back
// ============================================================================

use crate::models::{NewReplyLog, ReplyLog};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tokio::sync::RwLock;

/// Number of records the operator log endpoint reads back.
pub const RECENT_LIMIT: i64 = 500;

#[async_trait]
pub trait ReplyLogStore: Send + Sync {
    /// Persist one dispatch-attempt record. The store assigns the id and
    /// timestamp and returns the stored row.
    async fn append(&self, entry: NewReplyLog) -> Result<ReplyLog>;

    /// Most recent records, newest first, bounded to `limit`.
    async fn recent(&self, limit: i64) -> Result<Vec<ReplyLog>>;
}

// ============================================================================
// POSTGRES IMPLEMENTATION
// ============================================================================

pub struct PgReplyLogStore {
    pool: PgPool,
}

impl PgReplyLogStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        tracing::info!("🔌 Connecting to audit log database...");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .context("Failed to connect to audit log database")?;

        let store = Self { pool };
        store.init().await?;

        tracing::info!("✅ Audit log store ready");
        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reply_logs (
                id BIGSERIAL PRIMARY KEY,
                log_type TEXT NOT NULL,
                post_id TEXT,
                comment_id TEXT,
                psid TEXT,
                message TEXT NOT NULL,
                status TEXT NOT NULL,
                error TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create reply_logs table")?;

        Ok(())
    }
}

#[async_trait]
impl ReplyLogStore for PgReplyLogStore {
    async fn append(&self, entry: NewReplyLog) -> Result<ReplyLog> {
        let row = sqlx::query_as::<_, ReplyLog>(
            r#"
            INSERT INTO reply_logs
                (log_type, post_id, comment_id, psid, message, status, error)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, log_type, post_id, comment_id, psid, message, status, error, created_at
            "#,
        )
        .bind(&entry.log_type)
        .bind(&entry.post_id)
        .bind(&entry.comment_id)
        .bind(&entry.psid)
        .bind(&entry.message)
        .bind(entry.status.as_str())
        .bind(&entry.error)
        .fetch_one(&self.pool)
        .await
        .context("Failed to append reply log")?;

        Ok(row)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ReplyLog>> {
        let rows = sqlx::query_as::<_, ReplyLog>(
            r#"
            SELECT id, log_type, post_id, comment_id, psid, message, status, error, created_at
            FROM reply_logs
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to read reply logs")?;

        Ok(rows)
    }
}

// ============================================================================
// IN-MEMORY IMPLEMENTATION
// ============================================================================
// Stands in for Postgres when DATABASE_URL is unset (and in tests). The log
// then lives only as long as the process.

#[derive(Default)]
pub struct MemoryReplyLogStore {
    entries: RwLock<Vec<ReplyLog>>,
}

#[async_trait]
impl ReplyLogStore for MemoryReplyLogStore {
    async fn append(&self, entry: NewReplyLog) -> Result<ReplyLog> {
        let mut entries = self.entries.write().await;
        // Rows are never removed, so the length keeps ids monotonic.
        let row = ReplyLog {
            id: entries.len() as i64 + 1,
            log_type: entry.log_type,
            post_id: entry.post_id,
            comment_id: entry.comment_id,
            psid: entry.psid,
            message: entry.message,
            status: entry.status,
            error: entry.error,
            created_at: Utc::now(),
        };
        entries.push(row.clone());
        Ok(row)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ReplyLog>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
