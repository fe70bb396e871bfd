//! List Posts Use Case
//!
//! Listing is public. Ordering is creation time descending on both
//! surfaces; only the HTML surface truncates.

use std::sync::Arc;

use crate::domain::entity::PostWithAuthor;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// The HTML listing shows at most this many posts; the API returns all
pub const HTML_LIST_LIMIT: i64 = 50;

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// List posts newest first, optionally truncated
    pub async fn execute(&self, limit: Option<i64>) -> PostResult<Vec<PostWithAuthor>> {
        self.repo.list_newest_first(limit).await
    }
}
