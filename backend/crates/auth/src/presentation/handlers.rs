//! HTTP Handlers
//!
//! Browser-form surface: errors come back as a re-rendered form with a
//! human-readable message, successes as a redirect with the session
//! cookie set.

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::CookieConfig;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{LoginForm, RegisterForm};
use crate::presentation::views;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_form() -> Html<String> {
    Html(views::register_page(None))
}

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: form.username,
        email: form.email,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = session_cookie_config(&state.config).build_set_cookie(&output.session_token);
            ([(header::SET_COOKIE, cookie)], Redirect::to("/posts")).into_response()
        }
        Err(err) => {
            err.log();
            Html(views::register_page(Some(form_error_message(&err)))).into_response()
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: form.email,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = session_cookie_config(&state.config).build_set_cookie(&output.session_token);
            ([(header::SET_COOKIE, cookie)], Redirect::to("/posts")).into_response()
        }
        Err(err) => {
            err.log();
            Html(views::login_page(Some(form_error_message(&err)))).into_response()
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Idempotent: a stale or unverifiable token still clears the cookie
        if let Err(err) = use_case.execute(&token).await {
            err.log();
        }
    }

    let cookie = session_cookie_config(&state.config).build_delete_cookie();

    ([(header::SET_COOKIE, cookie)], Redirect::to("/login")).into_response()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Cookie settings for the session token
pub fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl.as_secs() as i64),
    }
}

/// Map an error to the message shown on the re-rendered form
fn form_error_message(err: &AuthError) -> &str {
    match err {
        AuthError::MissingFields => "All fields required",
        AuthError::Validation(message) => message,
        AuthError::UserExists => "User exists",
        AuthError::InvalidCredentials => "Invalid credentials",
        // Storage and internal failures stay generic
        _ => "Server error",
    }
}
