//! Create Post Use Case

use std::sync::Arc;

use auth::CurrentUser;

use crate::domain::entity::{Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Create a post owned by the current user
    pub async fn execute(
        &self,
        current_user: &CurrentUser,
        input: CreatePostInput,
    ) -> PostResult<PostWithAuthor> {
        let post = Post::new(input.title, input.body, current_user.user_id)?;

        self.repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            author_id = %post.author_id,
            "Post created"
        );

        Ok(PostWithAuthor {
            post,
            author_name: current_user.user_name.clone(),
        })
    }
}
