//! Shared State and Session Guards
//!
//! Both post surfaces resolve the request's `CurrentUser` here and pass
//! it explicitly into the use cases; the surfaces differ only in how a
//! missing session is signaled (redirect vs. 401).

use axum::http::HeaderMap;
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::{CurrentSessionUseCase, CurrentUser};

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<P, S>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub posts: Arc<P>,
    pub sessions: Arc<S>,
    pub auth_config: Arc<AuthConfig>,
}

impl<P, S> PostsAppState<P, S>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(posts: P, sessions: S, auth_config: AuthConfig) -> Self {
        Self {
            posts: Arc::new(posts),
            sessions: Arc::new(sessions),
            auth_config: Arc::new(auth_config),
        }
    }

    /// Resolve the current user from the session cookie, if any
    pub async fn current_user(&self, headers: &HeaderMap) -> Option<CurrentUser> {
        let token =
            platform::cookie::extract_cookie(headers, &self.auth_config.session_cookie_name)?;

        CurrentSessionUseCase::new(self.sessions.clone(), self.auth_config.clone())
            .current_user(&token)
            .await
            .ok()
    }

    /// Resolve the current user or fail with `Unauthorized`
    pub async fn require_user(&self, headers: &HeaderMap) -> PostResult<CurrentUser> {
        self.current_user(headers)
            .await
            .ok_or(PostError::Unauthorized)
    }
}
