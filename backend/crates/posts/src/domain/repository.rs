//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::PostId;

use crate::domain::entity::{Post, PostWithAuthor};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// Find post by ID with the author's username resolved
    async fn find_with_author(&self, post_id: &PostId) -> PostResult<Option<PostWithAuthor>>;

    /// List posts newest first, author usernames resolved
    ///
    /// `limit: None` returns every post.
    async fn list_newest_first(&self, limit: Option<i64>) -> PostResult<Vec<PostWithAuthor>>;

    /// Persist edited title/body/updated_at (author is never reassigned)
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// Delete a post
    async fn delete(&self, post_id: &PostId) -> PostResult<()>;
}
