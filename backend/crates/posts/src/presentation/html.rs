//! HTML Surface Handlers
//!
//! Browser form clients: guard failures become redirects or bare status
//! pages, never JSON. Missing posts redirect back to the listing on
//! mutating routes but 404 on the public detail view.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use uuid::Uuid;

use auth::domain::repository::SessionRepository;
use kernel::id::PostId;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, HTML_LIST_LIMIT,
    ListPostsUseCase, UpdateMode, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::ownership::check_owner;
use crate::domain::repository::PostRepository;
use crate::error::PostError;
use crate::presentation::dto::PostForm;
use crate::presentation::state::PostsAppState;
use crate::presentation::views;

const FLASH_POST_DELETED: &str = "Post deleted successfully.";

/// GET /posts
pub async fn list_posts<P, S>(
    State(state): State<PostsAppState<P, S>>,
    headers: HeaderMap,
) -> Response
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let user = state.current_user(&headers).await;

    let posts = match ListPostsUseCase::new(state.posts.clone())
        .execute(Some(HTML_LIST_LIMIT))
        .await
    {
        Ok(posts) => posts,
        Err(err) => return server_error_page(err),
    };

    // Drain the one-shot flash left by a prior delete
    let flash = match &user {
        Some(user) => match state.sessions.take_flash(user.session_id).await {
            Ok(flash) => flash,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to drain flash message");
                None
            }
        },
        None => None,
    };

    Html(views::index_page(&posts, user.as_ref(), flash.as_deref())).into_response()
}

/// GET /posts/new
pub async fn new_post_form<P, S>(
    State(state): State<PostsAppState<P, S>>,
    headers: HeaderMap,
) -> Response
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(user) = state.current_user(&headers).await else {
        return Redirect::to("/login").into_response();
    };

    Html(views::new_page(&user, None)).into_response()
}

/// POST /posts
pub async fn create_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    headers: HeaderMap,
    Form(form): Form<PostForm>,
) -> Response
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(user) = state.current_user(&headers).await else {
        return Redirect::to("/login").into_response();
    };

    let use_case = CreatePostUseCase::new(state.posts.clone());
    let input = CreatePostInput {
        title: form.title,
        body: form.body,
    };

    match use_case.execute(&user, input).await {
        Ok(created) => {
            Redirect::to(&format!("/posts/{}", created.post.post_id)).into_response()
        }
        Err(err) => {
            err.log();
            // Any failure re-renders the form with a generic message
            Html(views::new_page(&user, Some("Error creating post"))).into_response()
        }
    }
}

/// GET /posts/{id}
pub async fn show_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
) -> Response
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let user = state.current_user(&headers).await;
    let post_id = PostId::from_uuid(post_id);

    match GetPostUseCase::new(state.posts.clone()).execute(&post_id).await {
        Ok(post) => Html(views::show_page(&post, user.as_ref())).into_response(),
        Err(PostError::NotFound) => not_found_page(),
        Err(err) => server_error_page(err),
    }
}

/// GET /posts/{id}/edit
pub async fn edit_post_form<P, S>(
    State(state): State<PostsAppState<P, S>>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
) -> Response
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(user) = state.current_user(&headers).await else {
        return Redirect::to("/login").into_response();
    };
    let post_id = PostId::from_uuid(post_id);

    match GetPostUseCase::new(state.posts.clone()).execute(&post_id).await {
        Ok(post) => {
            if check_owner(&post.post, &user.user_id).is_err() {
                return forbidden_page();
            }
            Html(views::edit_page(&post, &user)).into_response()
        }
        // Missing post silently goes back to the listing
        Err(PostError::NotFound) => Redirect::to("/posts").into_response(),
        Err(err) => server_error_page(err),
    }
}

/// PUT /posts/{id}
pub async fn update_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
    Form(form): Form<PostForm>,
) -> Response
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(user) = state.current_user(&headers).await else {
        return Redirect::to("/login").into_response();
    };
    let post_id = PostId::from_uuid(post_id);

    let use_case = UpdatePostUseCase::new(state.posts.clone());
    let input = UpdatePostInput {
        title: Some(form.title),
        body: Some(form.body),
        mode: UpdateMode::Replace,
    };

    match use_case.execute(&post_id, &user, input).await {
        Ok(updated) => {
            Redirect::to(&format!("/posts/{}", updated.post.post_id)).into_response()
        }
        Err(PostError::NotFound) => Redirect::to("/posts").into_response(),
        Err(PostError::Forbidden) => forbidden_page(),
        Err(err) => server_error_page(err),
    }
}

/// DELETE /posts/{id}
pub async fn delete_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
) -> Response
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(user) = state.current_user(&headers).await else {
        return Redirect::to("/login").into_response();
    };
    let post_id = PostId::from_uuid(post_id);

    match DeletePostUseCase::new(state.posts.clone())
        .execute(&post_id, &user)
        .await
    {
        Ok(()) => {
            if let Err(err) = state
                .sessions
                .set_flash(user.session_id, FLASH_POST_DELETED)
                .await
            {
                tracing::warn!(error = %err, "Failed to set flash message");
            }
            Redirect::to("/posts").into_response()
        }
        Err(PostError::NotFound) => Redirect::to("/posts").into_response(),
        Err(PostError::Forbidden) => forbidden_page(),
        Err(err) => server_error_page(err),
    }
}

// ============================================================================
// Bare status pages
// ============================================================================

fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn forbidden_page() -> Response {
    (StatusCode::FORBIDDEN, "Forbidden").into_response()
}

fn server_error_page(err: PostError) -> Response {
    err.log();
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}
