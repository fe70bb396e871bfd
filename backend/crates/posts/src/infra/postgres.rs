//! PostgreSQL Repository Implementations

use sqlx::PgPool;
use uuid::Uuid;

use auth::domain::value_object::user_id::UserId;
use kernel::id::PostId;

use crate::domain::entity::{Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                body,
                author_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.author_id.as_uuid())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, title, body, author_id, created_at, updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_with_author(&self, post_id: &PostId) -> PostResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT
                p.post_id,
                p.title,
                p.body,
                p.author_id,
                p.created_at,
                p.updated_at,
                u.user_name AS author_name
            FROM posts p
            JOIN users u ON u.user_id = p.author_id
            WHERE p.post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostWithAuthorRow::into_post_with_author))
    }

    async fn list_newest_first(&self, limit: Option<i64>) -> PostResult<Vec<PostWithAuthor>> {
        // NULL limit means no LIMIT clause in Postgres
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT
                p.post_id,
                p.title,
                p.body,
                p.author_id,
                p.created_at,
                p.updated_at,
                u.user_name AS author_name
            FROM posts p
            JOIN users u ON u.user_id = p.author_id
            ORDER BY p.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(PostWithAuthorRow::into_post_with_author)
            .collect())
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        // author_id is deliberately absent from the SET list
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, body = $3, updated_at = $4
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<()> {
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// Internal row types for sqlx mapping

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    body: String,
    author_id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            title: self.title,
            body: self.body,
            author_id: UserId::from_uuid(self.author_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    post_id: Uuid,
    title: String,
    body: String,
    author_id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
    author_name: String,
}

impl PostWithAuthorRow {
    fn into_post_with_author(self) -> PostWithAuthor {
        PostWithAuthor {
            post: Post {
                post_id: PostId::from_uuid(self.post_id),
                title: self.title,
                body: self.body,
                author_id: UserId::from_uuid(self.author_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_name: self.author_name,
        }
    }
}
