//! Update Post Use Case
//!
//! Both surfaces funnel through this use case and the shared ownership
//! check; they differ only in [`UpdateMode`]. The divergence (full
//! overwrite vs. partial merge) is intentional, inherited behavior —
//! kept visible at this one seam rather than unified.

use std::sync::Arc;

use auth::CurrentUser;
use kernel::id::PostId;

use crate::domain::entity::PostWithAuthor;
use crate::domain::ownership::check_owner;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Edit semantics per surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// HTML form: every field taken from the submission, blank included
    Replace,
    /// JSON API: only non-empty provided fields overwrite
    Merge,
}

/// Update post input
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub body: Option<String>,
    pub mode: UpdateMode,
}

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Edit a post: fetch, check ownership, apply, persist
    ///
    /// The read-check-write sequence is not transactional; concurrent
    /// edits are last-write-wins.
    pub async fn execute(
        &self,
        post_id: &PostId,
        current_user: &CurrentUser,
        input: UpdatePostInput,
    ) -> PostResult<PostWithAuthor> {
        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        check_owner(&post, &current_user.user_id)?;

        match input.mode {
            UpdateMode::Replace => {
                post.apply_replace(
                    input.title.unwrap_or_default(),
                    input.body.unwrap_or_default(),
                );
            }
            UpdateMode::Merge => {
                post.apply_merge(input.title, input.body);
            }
        }

        self.repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, mode = ?input.mode, "Post updated");

        // Only the owner gets here, so the author name is the current
        // user's own snapshot
        Ok(PostWithAuthor {
            post,
            author_name: current_user.user_name.clone(),
        })
    }
}
