//! DTOs for both post surfaces
//!
//! JSON bodies use camelCase keys; browser form bodies keep their plain
//! field names. Optional JSON fields stay `Option` so the API's partial
//! merge can tell "absent" from "provided".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::PostWithAuthor;

// ============================================================================
// JSON API
// ============================================================================

/// POST /api/posts request
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCreateRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// PUT /api/posts/{id} request (partial merge)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUpdateRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Post representation returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&PostWithAuthor> for PostResponse {
    fn from(post: &PostWithAuthor) -> Self {
        Self {
            post_id: post.post.post_id.into_uuid(),
            title: post.post.title.clone(),
            body: post.post.body.clone(),
            author_id: post.post.author_id.into_uuid(),
            author_name: post.author_name.clone(),
            created_at: post.post.created_at,
            updated_at: post.post.updated_at,
        }
    }
}

/// DELETE /api/posts/{id} acknowledgment
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// ============================================================================
// HTML forms
// ============================================================================

/// Create/edit form body
///
/// Fields default to empty so a missing field behaves like a blank
/// submission (the HTML surface overwrites unconditionally).
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}
