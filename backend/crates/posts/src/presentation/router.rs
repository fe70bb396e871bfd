//! Post Routers
//!
//! Two routers over the same state: the HTML surface mounted at the
//! application root and the JSON API meant to be nested under
//! `/api/posts` by the caller.

use axum::{Router, routing::get};

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::infra::postgres::PgAuthRepository;

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::state::PostsAppState;
use crate::presentation::{api, html};

/// Create the HTML post router with PostgreSQL repositories
pub fn posts_html_router(
    posts: PgPostRepository,
    sessions: PgAuthRepository,
    config: AuthConfig,
) -> Router {
    posts_html_router_generic(posts, sessions, config)
}

/// Create a generic HTML post router for any repository implementations
pub fn posts_html_router_generic<P, S>(posts: P, sessions: S, config: AuthConfig) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState::new(posts, sessions, config);

    Router::new()
        .route(
            "/posts",
            get(html::list_posts::<P, S>).post(html::create_post::<P, S>),
        )
        .route("/posts/new", get(html::new_post_form::<P, S>))
        .route(
            "/posts/{id}",
            get(html::show_post::<P, S>)
                .put(html::update_post::<P, S>)
                .delete(html::delete_post::<P, S>),
        )
        .route("/posts/{id}/edit", get(html::edit_post_form::<P, S>))
        .with_state(state)
}

/// Create the JSON API post router with PostgreSQL repositories
pub fn posts_api_router(
    posts: PgPostRepository,
    sessions: PgAuthRepository,
    config: AuthConfig,
) -> Router {
    posts_api_router_generic(posts, sessions, config)
}

/// Create a generic JSON API post router for any repository implementations
pub fn posts_api_router_generic<P, S>(posts: P, sessions: S, config: AuthConfig) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState::new(posts, sessions, config);

    Router::new()
        .route(
            "/",
            get(api::list_posts::<P, S>).post(api::create_post::<P, S>),
        )
        .route(
            "/{id}",
            get(api::get_post::<P, S>)
                .put(api::update_post::<P, S>)
                .delete(api::delete_post::<P, S>),
        )
        .with_state(state)
}
