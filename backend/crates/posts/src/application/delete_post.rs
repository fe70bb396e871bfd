//! Delete Post Use Case

use std::sync::Arc;

use auth::CurrentUser;
use kernel::id::PostId;

use crate::domain::ownership::check_owner;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Delete a post: fetch, check ownership, remove
    pub async fn execute(&self, post_id: &PostId, current_user: &CurrentUser) -> PostResult<()> {
        let post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        check_owner(&post, &current_user.user_id)?;

        self.repo.delete(post_id).await?;

        tracing::info!(
            post_id = %post_id,
            author_id = %current_user.user_id,
            "Post deleted"
        );

        Ok(())
    }
}
