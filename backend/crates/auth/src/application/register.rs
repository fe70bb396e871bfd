//! Register Use Case
//!
//! Creates a new user account and establishes its first session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// Session token for cookie
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository + SessionRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository + SessionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // All fields required
        if input.user_name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.trim().is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        let user_name = UserName::new(input.user_name)?;
        let email = Email::new(input.email)?;

        // Duplicate re-check at the service layer; the unique indexes
        // catch the remaining race window
        if self
            .repo
            .exists_by_user_name_or_email(&user_name, &email)
            .await?
        {
            return Err(AuthError::UserExists);
        }

        // Hash before creating anything: a hashing failure must not
        // leave a user behind
        let raw_password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, email, password_hash);

        // Persist the user first; only then establish the session
        UserRepository::create(self.repo.as_ref(), &user).await?;

        let session = Session::new(
            user.user_id,
            user.user_name.as_str().to_string(),
            user.email.as_str().to_string(),
            self.config.session_ttl_chrono(),
        );
        SessionRepository::create(self.repo.as_ref(), &session).await?;

        let session_token = sign_session_token(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput { session_token })
    }
}
