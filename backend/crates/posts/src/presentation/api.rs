//! JSON API Surface Handlers
//!
//! Programmatic clients: same entity and ownership rules as the HTML
//! surface, but every error is a status code with an `{"error": ...}`
//! body and nothing redirects.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use uuid::Uuid;

use auth::domain::repository::SessionRepository;
use kernel::id::PostId;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdateMode, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use crate::presentation::dto::{
    ApiCreateRequest, ApiUpdateRequest, DeleteResponse, PostResponse,
};
use crate::presentation::state::PostsAppState;

/// GET /api/posts
pub async fn list_posts<P, S>(
    State(state): State<PostsAppState<P, S>>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    // The API returns every post; only the HTML listing truncates
    let posts = ListPostsUseCase::new(state.posts.clone()).execute(None).await?;

    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// GET /api/posts/{id}
pub async fn get_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    Path(post_id): Path<Uuid>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);

    let post = GetPostUseCase::new(state.posts.clone()).execute(&post_id).await?;

    Ok(Json(PostResponse::from(&post)))
}

/// POST /api/posts
pub async fn create_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    headers: HeaderMap,
    Json(req): Json<ApiCreateRequest>,
) -> PostResult<impl IntoResponse>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let user = state.require_user(&headers).await?;

    let use_case = CreatePostUseCase::new(state.posts.clone());
    let input = CreatePostInput {
        // Missing fields collapse to blank and fail the creation invariant
        title: req.title.unwrap_or_default(),
        body: req.body.unwrap_or_default(),
    };

    let created = use_case.execute(&user, input).await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(&created))))
}

/// PUT /api/posts/{id}
pub async fn update_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<ApiUpdateRequest>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let user = state.require_user(&headers).await?;
    let post_id = PostId::from_uuid(post_id);

    let use_case = UpdatePostUseCase::new(state.posts.clone());
    let input = UpdatePostInput {
        title: req.title,
        body: req.body,
        mode: UpdateMode::Merge,
    };

    let updated = use_case.execute(&post_id, &user, input).await?;

    Ok(Json(PostResponse::from(&updated)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<P, S>(
    State(state): State<PostsAppState<P, S>>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
) -> PostResult<Json<DeleteResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let user = state.require_user(&headers).await?;
    let post_id = PostId::from_uuid(post_id);

    DeletePostUseCase::new(state.posts.clone())
        .execute(&post_id, &user)
        .await?;

    Ok(Json(DeleteResponse { success: true }))
}
