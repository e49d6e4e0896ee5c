/// Follow repository
///
/// Same conflict-absorbing pattern as likes: the unique (follower, following)
/// pair makes re-follow a no-op and unfollow of a missing edge a success.
use crate::models::Follow;
use sqlx::PgPool;

/// Idempotent follow; returns true if a new edge was inserted.
pub async fn create_follow(
    pool: &PgPool,
    follower_id: i64,
    following_id: i64,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO follows (follower_id, following_id)
        VALUES ($1, $2)
        ON CONFLICT (follower_id, following_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(follower_id)
    .bind(following_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted.is_some())
}

/// Idempotent unfollow; returns true if an edge was removed.
pub async fn delete_follow(
    pool: &PgPool,
    follower_id: i64,
    following_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
        .bind(follower_id)
        .bind(following_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Ids of users the given user follows
pub async fn list_following_ids(pool: &PgPool, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT following_id
        FROM follows
        WHERE follower_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Ids of users following the given user
pub async fn list_follower_ids(pool: &PgPool, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT follower_id
        FROM follows
        WHERE following_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// All edges where one of the given users is the follower, for batch
/// "following" projections
pub async fn list_edges_by_followers(
    pool: &PgPool,
    user_ids: &[i64],
) -> Result<Vec<Follow>, sqlx::Error> {
    sqlx::query_as::<_, Follow>(
        r#"
        SELECT id, follower_id, following_id, created_at
        FROM follows
        WHERE follower_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await
}

/// All edges where one of the given users is followed, for batch
/// "followers" projections
pub async fn list_edges_by_following(
    pool: &PgPool,
    user_ids: &[i64],
) -> Result<Vec<Follow>, sqlx::Error> {
    sqlx::query_as::<_, Follow>(
        r#"
        SELECT id, follower_id, following_id, created_at
        FROM follows
        WHERE following_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await
}
