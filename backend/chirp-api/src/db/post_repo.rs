/// Post repository
use crate::models::Post;
use sqlx::PgPool;

pub async fn create_post(
    pool: &PgPool,
    author_id: i64,
    content: &str,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (content, author_id)
        VALUES ($1, $2)
        RETURNING id, content, author_id, created_at
        "#,
    )
    .bind(content)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, content, author_id, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Most recent posts first, bounded page
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, content, author_id, created_at
        FROM posts
        ORDER BY id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Feed query: recent posts restricted to a set of authors. The membership
/// filter runs in the store, not in the service.
pub async fn list_recent_by_authors(
    pool: &PgPool,
    author_ids: &[i64],
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, content, author_id, created_at
        FROM posts
        WHERE author_id = ANY($1)
        ORDER BY id DESC
        LIMIT $2
        "#,
    )
    .bind(author_ids)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// All posts for a batch of authors, for profile stitching
pub async fn list_by_authors(pool: &PgPool, author_ids: &[i64]) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, content, author_id, created_at
        FROM posts
        WHERE author_id = ANY($1)
        ORDER BY id DESC
        "#,
    )
    .bind(author_ids)
    .fetch_all(pool)
    .await
}
