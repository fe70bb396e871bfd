//! Current Session Use Case
//!
//! Resolves the cookie-carried token into the request's [`CurrentUser`],
//! the explicit context object both post surfaces build their guards on.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_session_token;
use crate::domain::entity::session::{CurrentUser, Session};
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Current session use case
pub struct CurrentSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CurrentSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve the current user, or fail with `SessionInvalid`
    pub async fn current_user(&self, session_token: &str) -> AuthResult<CurrentUser> {
        let session = self.get_session(session_token).await?;
        Ok(CurrentUser::from(&session))
    }

    /// Resolve the full session record
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = verify_session_token(session_token, &self.config.session_secret)
            .ok_or(AuthError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
