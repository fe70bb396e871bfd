//! Logout Use Case
//!
//! Invalidates a user session. Logging out with no valid session is not
//! an error; the operation is idempotent.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Destroy the session the token refers to, if any
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let Some(session_id) = verify_session_token(session_token, &self.config.session_secret)
        else {
            // Unverifiable token: nothing to destroy
            return Ok(());
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
