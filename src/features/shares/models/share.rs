use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for shares
///
/// Immutable after insert; the only lifecycle transitions are creation and
/// deletion (lazy on read, or by the expiry sweeper).
#[derive(Debug, Clone, FromRow)]
pub struct Share {
    pub id: Uuid,
    pub code: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub object_key: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a share row; `id` and `created_at` are DB-generated.
#[derive(Debug, Clone)]
pub struct NewShare {
    pub code: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub object_key: String,
}

impl Share {
    pub fn expires_at(&self, ttl: Duration) -> DateTime<Utc> {
        self.created_at + ttl
    }

    /// A share is expired once its full TTL has elapsed (inclusive bound).
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.created_at >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share_created_at(created_at: DateTime<Utc>) -> Share {
        Share {
            id: Uuid::nil(),
            code: "k3mxw2p9qa".to_string(),
            file_name: "report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: 12345,
            object_key: "shares/k3mxw2p9qa/report.pdf".to_string(),
            created_at,
        }
    }

    #[test]
    fn test_share_live_before_ttl_elapses() {
        let ttl = Duration::hours(24);
        let created = Utc::now();
        let share = share_created_at(created);

        assert!(!share.is_expired(ttl, created + Duration::seconds(1)));
        assert!(!share.is_expired(ttl, created + Duration::hours(24) - Duration::seconds(1)));
    }

    #[test]
    fn test_share_expired_at_exact_ttl_boundary() {
        let ttl = Duration::hours(24);
        let created = Utc::now();
        let share = share_created_at(created);

        assert!(share.is_expired(ttl, created + Duration::hours(24)));
        assert!(share.is_expired(ttl, created + Duration::hours(25)));
    }

    #[test]
    fn test_expires_at_is_created_plus_ttl() {
        let ttl = Duration::hours(24);
        let created = Utc::now();
        let share = share_created_at(created);

        assert_eq!(share.expires_at(ttl), created + ttl);
    }
}
