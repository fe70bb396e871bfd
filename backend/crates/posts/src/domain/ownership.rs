//! Ownership Check
//!
//! The single authorization rule both post surfaces share: only the
//! author referenced by a post may mutate or delete it. Identifiers are
//! compared as opaque typed values.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::Post;
use crate::error::{PostError, PostResult};

/// Fail with `Forbidden` unless `user_id` owns `post`
pub fn check_owner(post: &Post, user_id: &UserId) -> PostResult<()> {
    if post.author_id == *user_id {
        Ok(())
    } else {
        Err(PostError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes() {
        let author = UserId::new();
        let post = Post::new("t".to_string(), "b".to_string(), author).unwrap();

        assert!(check_owner(&post, &author).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let post = Post::new("t".to_string(), "b".to_string(), UserId::new()).unwrap();

        assert!(matches!(
            check_owner(&post, &UserId::new()),
            Err(PostError::Forbidden)
        ));
    }
}
