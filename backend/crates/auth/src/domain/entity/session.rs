//! Session Entity
//!
//! Server-side session record referenced by a cookie-carried token.
//! Holds a denormalized snapshot of the user taken at login/registration
//! time; the User record is immutable in-scope, so the snapshot cannot
//! go stale.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to the authenticated user
    pub user_id: UserId,
    /// Username snapshot
    pub user_name: String,
    /// Email snapshot
    pub email: String,
    /// One-shot flash message, drained on the next listing render
    pub flash: Option<String>,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session snapshotting the user
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, user_name: String, email: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            user_name,
            email,
            flash: None,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

/// The authenticated identity resolved for a single request
///
/// Passed explicitly into handlers instead of living in ambient per-request
/// state, so authorization logic stays testable without a live session
/// store.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<&Session> for CurrentUser {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.session_id,
            user_id: session.user_id,
            user_name: session.user_name.clone(),
            email: session.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unexpired() {
        let session = Session::new(
            UserId::new(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            Duration::hours(1),
        );

        assert!(!session.is_expired());
        assert!(session.flash.is_none());
    }

    #[test]
    fn test_expired_session() {
        let mut session = Session::new(
            UserId::new(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            Duration::hours(1),
        );
        session.expires_at_ms = Utc::now().timestamp_millis() - 1;

        assert!(session.is_expired());
    }

    #[test]
    fn test_current_user_snapshot() {
        let session = Session::new(
            UserId::new(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            Duration::hours(1),
        );

        let current = CurrentUser::from(&session);
        assert_eq!(current.session_id, session.session_id);
        assert_eq!(current.user_id, session.user_id);
        assert_eq!(current.user_name, "alice");
        assert_eq!(current.email, "alice@example.com");
    }
}
