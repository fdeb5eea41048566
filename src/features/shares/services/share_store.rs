use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::shares::models::{NewShare, Share};

const SHARE_COLUMNS: &str = "id, code, file_name, content_type, size_bytes, object_key, created_at";

/// Durable keyed store for share metadata with time-based expiry.
///
/// Expiry is enforced twice: lazily here (an expired row found on read is
/// deleted and reported as absent) and by the background sweeper. The
/// observable contract is that `get` never returns a row older than the TTL.
pub struct ShareStore {
    pool: PgPool,
    ttl: Duration,
}

impl ShareStore {
    pub fn new(pool: PgPool, ttl_secs: u64) -> Self {
        Self {
            pool,
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Insert a new share record.
    ///
    /// Uniqueness of `code` rides on the database constraint (atomic insert,
    /// never check-then-insert); a collision surfaces as `Conflict`.
    pub async fn put(&self, new_share: NewShare) -> Result<Share> {
        let share = sqlx::query_as::<_, Share>(&format!(
            "INSERT INTO shares (code, file_name, content_type, size_bytes, object_key) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {SHARE_COLUMNS}"
        ))
        .bind(&new_share.code)
        .bind(&new_share.file_name)
        .bind(&new_share.content_type)
        .bind(new_share.size_bytes)
        .bind(&new_share.object_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("share code '{}' already exists", new_share.code))
            }
            _ => AppError::Database(e),
        })?;

        Ok(share)
    }

    /// Fetch a share by code, treating expired rows as absent.
    ///
    /// An expired row found here is deleted eagerly; its blob is left for the
    /// sweeper.
    pub async fn get(&self, code: &str) -> Result<Option<Share>> {
        let share = sqlx::query_as::<_, Share>(&format!(
            "SELECT {SHARE_COLUMNS} FROM shares WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        match share {
            Some(s) if s.is_expired(self.ttl, Utc::now()) => {
                tracing::debug!("Share '{}' expired, deleting lazily on read", s.code);
                self.delete(s.id).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Fetch a batch of expired shares, oldest first.
    pub async fn fetch_expired(&self, limit: i64) -> Result<Vec<Share>> {
        let cutoff = Utc::now() - self.ttl;

        let shares = sqlx::query_as::<_, Share>(&format!(
            "SELECT {SHARE_COLUMNS} FROM shares WHERE created_at <= $1 ORDER BY created_at LIMIT $2"
        ))
        .bind(cutoff)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(shares)
    }

    /// Delete a share row. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM shares WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
