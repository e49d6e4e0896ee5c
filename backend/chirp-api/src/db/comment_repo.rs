/// Comment repository
use crate::models::Comment;
use sqlx::PgPool;

pub async fn create_comment(
    pool: &PgPool,
    author_id: i64,
    post_id: i64,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, author_id, post_id)
        VALUES ($1, $2, $3)
        RETURNING id, content, author_id, post_id, created_at
        "#,
    )
    .bind(content)
    .bind(author_id)
    .bind(post_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, author_id, post_id, created_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Comments under one post, oldest first
pub async fn list_by_post(pool: &PgPool, post_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, author_id, post_id, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Comments for a batch of posts, for listing stitches
pub async fn list_by_posts(pool: &PgPool, post_ids: &[i64]) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, author_id, post_id, created_at
        FROM comments
        WHERE post_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
}

/// Comments authored by a batch of users, for profile stitching
pub async fn list_by_authors(
    pool: &PgPool,
    author_ids: &[i64],
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, author_id, post_id, created_at
        FROM comments
        WHERE author_id = ANY($1)
        ORDER BY id DESC
        "#,
    )
    .bind(author_ids)
    .fetch_all(pool)
    .await
}

/// Delete one comment; zero rows affected means it was already gone
pub async fn delete_comment(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
