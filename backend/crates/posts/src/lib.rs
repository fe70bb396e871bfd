//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, ownership rule, repository trait
//! - `application/` - Use cases (create, get, list, update, delete)
//! - `infra/` - Database implementations
//! - `presentation/` - HTML + JSON handlers, routers, DTOs, views
//!
//! ## Authorization Model
//! - Listing and detail views are public
//! - Creating requires an authenticated session
//! - Editing and deleting additionally require ownership: the single
//!   `domain::ownership::check_owner` rule is shared by both surfaces
//! - The HTML edit is a full overwrite while the API edit is a partial
//!   merge; the divergence is inherited behavior, kept deliberately

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{HTML_LIST_LIMIT, UpdateMode};
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::{posts_api_router, posts_html_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::api;
    pub use crate::presentation::html;
}

pub mod store {
    pub use crate::infra::postgres::PgPostRepository as PostStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
