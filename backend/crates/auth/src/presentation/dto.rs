//! Form DTOs for the browser-facing auth flows
//!
//! Fields default to empty strings so a missing form field surfaces as
//! the "all fields required" validation error rather than a rejected
//! request body.

use serde::Deserialize;

/// POST /register form body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
