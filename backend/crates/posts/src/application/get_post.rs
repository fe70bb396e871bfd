//! Get Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::PostWithAuthor;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Get post use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Fetch a post with its author resolved, or fail with `NotFound`
    pub async fn execute(&self, post_id: &PostId) -> PostResult<PostWithAuthor> {
        self.repo
            .find_with_author(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
