//! Post Entity
//!
//! A post belongs to exactly one author, fixed at creation. Title and
//! body must be non-empty when the post is created; the HTML surface's
//! full-overwrite edit may later blank them (the two surfaces'
//! edit semantics intentionally differ, see [`Post::apply_replace`] and
//! [`Post::apply_merge`]).

use chrono::{DateTime, Utc};

use auth::domain::value_object::user_id::UserId;
use kernel::id::PostId;

use crate::error::{PostError, PostResult};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    /// Internal UUID identifier
    pub post_id: PostId,
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
    /// Author reference, never reassigned after creation
    pub author_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Set on each edit, null until the first one
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post
    ///
    /// Title and body are required and must be non-empty.
    pub fn new(title: String, body: String, author_id: UserId) -> PostResult<Self> {
        if title.is_empty() || body.is_empty() {
            return Err(PostError::InvalidData);
        }

        Ok(Self {
            post_id: PostId::new(),
            title,
            body,
            author_id,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Full overwrite: browser form semantics
    ///
    /// Every field is taken from the submission as-is; a blank field
    /// overwrites with blank.
    pub fn apply_replace(&mut self, title: String, body: String) {
        self.title = title;
        self.body = body;
        self.updated_at = Some(Utc::now());
    }

    /// Partial merge: JSON API semantics
    ///
    /// Only non-empty provided fields overwrite; absent or blank fields
    /// preserve the existing values.
    pub fn apply_merge(&mut self, title: Option<String>, body: Option<String>) {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(body) = body.filter(|b| !b.is_empty()) {
            self.body = body;
        }
        self.updated_at = Some(Utc::now());
    }
}

/// A post with its author's username resolved, for listings and detail
/// views
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(
            "First post".to_string(),
            "Hello world".to_string(),
            UserId::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_post_requires_title_and_body() {
        let author = UserId::new();

        assert!(matches!(
            Post::new(String::new(), "body".to_string(), author),
            Err(PostError::InvalidData)
        ));
        assert!(matches!(
            Post::new("title".to_string(), String::new(), author),
            Err(PostError::InvalidData)
        ));

        let post = Post::new("title".to_string(), "body".to_string(), author).unwrap();
        assert_eq!(post.author_id, author);
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn test_apply_replace_overwrites_blank() {
        let mut post = sample_post();

        post.apply_replace("New title".to_string(), String::new());

        assert_eq!(post.title, "New title");
        assert_eq!(post.body, "");
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn test_apply_merge_preserves_absent_and_blank() {
        let mut post = sample_post();

        post.apply_merge(Some("New title".to_string()), None);
        assert_eq!(post.title, "New title");
        assert_eq!(post.body, "Hello world");

        post.apply_merge(None, Some(String::new()));
        assert_eq!(post.body, "Hello world");

        post.apply_merge(None, Some("New body".to_string()));
        assert_eq!(post.body, "New body");
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn test_author_survives_edits() {
        let mut post = sample_post();
        let author = post.author_id;

        post.apply_replace("t".to_string(), "b".to_string());
        post.apply_merge(Some("t2".to_string()), Some("b2".to_string()));

        assert_eq!(post.author_id, author);
    }
}
