//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, form DTOs, router, views
//!
//! ## Features
//! - User registration with username + email + password
//! - Email/password login and logout for browser form clients
//! - Server-side sessions with HMAC-signed cookie tokens
//! - Explicit per-request `CurrentUser` context for downstream guards
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in plaintext
//! - Unknown email and wrong password are indistinguishable to callers
//! - Session tokens carry an HMAC signature; the session row is the
//!   authority on validity and expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::CurrentSessionUseCase;
pub use domain::entity::session::CurrentUser;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
