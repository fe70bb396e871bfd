//! Unit tests for the auth crate
//!
//! Use cases are exercised against an in-memory repository so the
//! authorization and session flows are testable without a live store.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
pub(crate) struct MemAuthRepository {
    pub users: Arc<Mutex<Vec<User>>>,
    pub sessions: Arc<Mutex<Vec<Session>>>,
}

impl UserRepository for MemAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.user_name == *user_name || u.email == *email))
    }
}

impl SessionRepository for MemAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == session_id)
            .cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .retain(|s| s.session_id != session_id);
        Ok(())
    }

    async fn set_flash(&self, session_id: Uuid, message: &str) -> AuthResult<()> {
        if let Some(session) = self
            .sessions
            .lock()
            .unwrap()
            .iter_mut()
            .find(|s| s.session_id == session_id)
        {
            session.flash = Some(message.to_string());
        }
        Ok(())
    }

    async fn take_flash(&self, session_id: Uuid) -> AuthResult<Option<String>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter_mut()
            .find(|s| s.session_id == session_id)
            .and_then(|s| s.flash.take()))
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

fn test_setup() -> (Arc<MemAuthRepository>, Arc<AuthConfig>) {
    (
        Arc::new(MemAuthRepository::default()),
        Arc::new(AuthConfig::development()),
    )
}

fn register_input(user_name: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        user_name: user_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ============================================================================
// Registration
// ============================================================================

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_creates_user_and_session() {
        let (repo, config) = test_setup();
        let use_case = RegisterUseCase::new(repo.clone(), config.clone());

        let output = use_case
            .execute(register_input("alice", "alice@example.com", "password one"))
            .await
            .unwrap();

        assert_eq!(repo.users.lock().unwrap().len(), 1);
        assert_eq!(repo.sessions.lock().unwrap().len(), 1);

        // The returned token resolves to a session snapshotting the user
        let current = CurrentSessionUseCase::new(repo.clone(), config)
            .current_user(&output.session_token)
            .await
            .unwrap();
        assert_eq!(current.user_name, "alice");
        assert_eq!(current.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_register_missing_fields_persists_nothing() {
        let (repo, config) = test_setup();
        let use_case = RegisterUseCase::new(repo.clone(), config);

        for input in [
            register_input("", "alice@example.com", "password one"),
            register_input("alice", "", "password one"),
            register_input("alice", "alice@example.com", ""),
            register_input("   ", "alice@example.com", "password one"),
        ] {
            let err = use_case.execute(input).await.unwrap_err();
            assert!(matches!(err, AuthError::MissingFields));
        }

        assert!(repo.users.lock().unwrap().is_empty());
        assert!(repo.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let (repo, config) = test_setup();
        let use_case = RegisterUseCase::new(repo.clone(), config);

        use_case
            .execute(register_input("alice", "alice@example.com", "password one"))
            .await
            .unwrap();

        let err = use_case
            .execute(register_input("bob", "alice@example.com", "password two"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserExists));

        // No new user was persisted
        assert_eq!(repo.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_user_name_conflicts() {
        let (repo, config) = test_setup();
        let use_case = RegisterUseCase::new(repo.clone(), config);

        use_case
            .execute(register_input("alice", "alice@example.com", "password one"))
            .await
            .unwrap();

        let err = use_case
            .execute(register_input("alice", "other@example.com", "password two"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserExists));
        assert_eq!(repo.users.lock().unwrap().len(), 1);
    }
}

// ============================================================================
// Login
// ============================================================================

mod login_tests {
    use super::*;

    async fn with_registered_alice() -> (Arc<MemAuthRepository>, Arc<AuthConfig>) {
        let (repo, config) = test_setup();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("alice", "alice@example.com", "password one"))
            .await
            .unwrap();
        (repo, config)
    }

    #[tokio::test]
    async fn test_login_success() {
        let (repo, config) = with_registered_alice().await;

        let output = LoginUseCase::new(repo.clone(), config.clone())
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "password one".to_string(),
            })
            .await
            .unwrap();

        let current = CurrentSessionUseCase::new(repo, config)
            .current_user(&output.session_token)
            .await
            .unwrap();
        assert_eq!(current.user_name, "alice");
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let (repo, config) = with_registered_alice().await;
        let use_case = LoginUseCase::new(repo, config);

        let unknown_email = use_case
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "password one".to_string(),
            })
            .await
            .unwrap_err();

        let wrong_password = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "not the password".to_string(),
            })
            .await
            .unwrap_err();

        // Byte-identical messages prevent account enumeration
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let (repo, config) = with_registered_alice().await;
        let use_case = LoginUseCase::new(repo, config);

        let err = use_case
            .execute(LoginInput {
                email: String::new(),
                password: "password one".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingFields));
    }
}

// ============================================================================
// Sessions
// ============================================================================

mod session_tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_logout_destroys_session_and_is_idempotent() {
        let (repo, config) = test_setup();

        let output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("alice", "alice@example.com", "password one"))
            .await
            .unwrap();

        let logout = LogoutUseCase::new(repo.clone(), config.clone());
        logout.execute(&output.session_token).await.unwrap();
        assert!(repo.sessions.lock().unwrap().is_empty());

        // Logging out again, or with garbage, is not an error
        logout.execute(&output.session_token).await.unwrap();
        logout.execute("garbage-token").await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_is_invalid_and_removed() {
        let (repo, config) = test_setup();

        let output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("alice", "alice@example.com", "password one"))
            .await
            .unwrap();

        repo.sessions.lock().unwrap()[0].expires_at_ms = Utc::now().timestamp_millis() - 1;

        let err = CurrentSessionUseCase::new(repo.clone(), config)
            .current_user(&output.session_token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
        assert!(repo.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_token_for_unknown_session_is_invalid() {
        let (repo, config) = test_setup();

        let token =
            crate::application::token::sign_session_token(Uuid::new_v4(), &config.session_secret);

        let err = CurrentSessionUseCase::new(repo, config)
            .current_user(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
    }

    #[tokio::test]
    async fn test_flash_drains_exactly_once() {
        let (repo, _config) = test_setup();

        let session = Session::new(
            UserId::new(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            chrono::Duration::hours(1),
        );
        SessionRepository::create(repo.as_ref(), &session)
            .await
            .unwrap();

        repo.set_flash(session.session_id, "Post deleted successfully.")
            .await
            .unwrap();

        assert_eq!(
            repo.take_flash(session.session_id).await.unwrap(),
            Some("Post deleted successfully.".to_string())
        );
        assert_eq!(repo.take_flash(session.session_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cleanup_expired_removes_only_expired() {
        let (repo, _config) = test_setup();

        let live = Session::new(
            UserId::new(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            chrono::Duration::hours(1),
        );
        let mut dead = Session::new(
            UserId::new(),
            "bob".to_string(),
            "bob@example.com".to_string(),
            chrono::Duration::hours(1),
        );
        dead.expires_at_ms = Utc::now().timestamp_millis() - 1;

        SessionRepository::create(repo.as_ref(), &live).await.unwrap();
        SessionRepository::create(repo.as_ref(), &dead).await.unwrap();

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        let remaining = repo.sessions.lock().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].session_id, live.session_id);
    }
}

// ============================================================================
// Config
// ============================================================================

mod config_tests {
    use super::*;
    use platform::cookie::SameSite;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert_eq!(config.session_cookie_name, "blog_session");
        assert_eq!(config.session_ttl, Duration::from_secs(7 * 24 * 3600));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.password_pepper.is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.session_secret, config2.session_secret);
        assert!(config1.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();

        assert!(!config.cookie_secure);
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }
}

// ============================================================================
// Errors
// ============================================================================

mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingFields, StatusCode::BAD_REQUEST),
            (
                AuthError::Validation("bad input".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::UserExists, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::SessionInvalid, StatusCode::UNAUTHORIZED),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_server_errors_stay_generic() {
        let err = AuthError::Internal("connection pool exploded".into());
        let app_err = err.to_app_error();
        assert_eq!(app_err.message(), "Server error");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(AuthError::MissingFields.to_string(), "All fields required");
        assert_eq!(AuthError::UserExists.to_string(), "User exists");
    }
}
