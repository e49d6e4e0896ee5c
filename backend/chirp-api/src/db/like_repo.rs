/// Like repository for post and comment like edges
///
/// Inserts absorb the unique-pair conflict with ON CONFLICT DO NOTHING, so a
/// duplicate like is a no-op rather than an error. Deletes tolerate zero
/// matching rows.
use crate::models::{CommentLike, PostLike};
use sqlx::PgPool;

/// Idempotent like; returns true if a new edge was inserted.
pub async fn like_post(pool: &PgPool, user_id: i64, post_id: i64) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO post_likes (user_id, post_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, post_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted.is_some())
}

/// Idempotent unlike; returns true if an edge was removed.
pub async fn unlike_post(pool: &PgPool, user_id: i64, post_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM post_likes WHERE user_id = $1 AND post_id = $2")
        .bind(user_id)
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_post_likes(pool: &PgPool, post_id: i64) -> Result<Vec<PostLike>, sqlx::Error> {
    sqlx::query_as::<_, PostLike>(
        r#"
        SELECT id, user_id, post_id, created_at
        FROM post_likes
        WHERE post_id = $1
        ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Likes for a batch of posts, for listing stitches
pub async fn list_likes_for_posts(
    pool: &PgPool,
    post_ids: &[i64],
) -> Result<Vec<PostLike>, sqlx::Error> {
    sqlx::query_as::<_, PostLike>(
        r#"
        SELECT id, user_id, post_id, created_at
        FROM post_likes
        WHERE post_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
}

/// Idempotent like on a comment; returns true if a new edge was inserted.
pub async fn like_comment(
    pool: &PgPool,
    user_id: i64,
    comment_id: i64,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO comment_likes (user_id, comment_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, comment_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted.is_some())
}

/// Idempotent unlike on a comment; returns true if an edge was removed.
pub async fn unlike_comment(
    pool: &PgPool,
    user_id: i64,
    comment_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comment_likes WHERE user_id = $1 AND comment_id = $2")
        .bind(user_id)
        .bind(comment_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_comment_likes(
    pool: &PgPool,
    comment_id: i64,
) -> Result<Vec<CommentLike>, sqlx::Error> {
    sqlx::query_as::<_, CommentLike>(
        r#"
        SELECT id, user_id, comment_id, created_at
        FROM comment_likes
        WHERE comment_id = $1
        ORDER BY id
        "#,
    )
    .bind(comment_id)
    .fetch_all(pool)
    .await
}

/// Likes for a batch of comments, for the single-post view
pub async fn list_likes_for_comments(
    pool: &PgPool,
    comment_ids: &[i64],
) -> Result<Vec<CommentLike>, sqlx::Error> {
    sqlx::query_as::<_, CommentLike>(
        r#"
        SELECT id, user_id, comment_id, created_at
        FROM comment_likes
        WHERE comment_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(comment_ids)
    .fetch_all(pool)
    .await
}
