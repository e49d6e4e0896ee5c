/// User repository - handles all database operations for users
use crate::models::User;
use sqlx::PgPool;

/// Create a new user in the database
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    username: &str,
    password_hash: &str,
    bio: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, username, password_hash, bio)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, username, password_hash, bio, created_at
        "#,
    )
    .bind(name)
    .bind(username)
    .bind(password_hash)
    .bind(bio)
    .fetch_one(pool)
    .await
}

/// Find a user by ID
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, password_hash, bio, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Find a user by username
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, password_hash, bio, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Check if a username is already taken
pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
        .bind(username)
        .fetch_one(pool)
        .await
}

/// List the most recently registered users
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, password_hash, bio, created_at
        FROM users
        ORDER BY id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Fetch a batch of users by id, for join stitching
pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, password_hash, bio, created_at
        FROM users
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await
}

/// Case-insensitive username substring search
pub async fn search_by_username(
    pool: &PgPool,
    query: &str,
    limit: i64,
) -> Result<Vec<User>, sqlx::Error> {
    let pattern = format!("%{}%", query);
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, password_hash, bio, created_at
        FROM users
        WHERE username ILIKE $1
        ORDER BY id DESC
        LIMIT $2
        "#,
    )
    .bind(pattern)
    .bind(limit)
    .fetch_all(pool)
    .await
}
