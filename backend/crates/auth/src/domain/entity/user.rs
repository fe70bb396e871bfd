//! User Entity
//!
//! Core user record: public profile plus the hashed credential.
//! Users are created at registration and never updated or deleted by any
//! request-handling path.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, display and author attribution)
    pub user_name: UserName,
    /// Email address (unique, used for login)
    pub email: Email,
    /// Hashed password credential, never plaintext
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from validated parts
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
