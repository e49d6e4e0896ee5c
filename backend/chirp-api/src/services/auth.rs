/// Authentication service - registration, login, token issuance
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::security::{generate_token, hash_password, verify_password};

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    jwt_secret: String,
    jwt_expiry_hours: i64,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_secret: String, jwt_expiry_hours: i64) -> Self {
        Self {
            pool,
            jwt_secret,
            jwt_expiry_hours,
        }
    }

    /// Register a new account. A taken username is a client-visible conflict.
    pub async fn register(
        &self,
        name: &str,
        username: &str,
        password: &str,
        bio: Option<&str>,
    ) -> Result<User> {
        if user_repo::username_exists(&self.pool, username).await? {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let password_hash = hash_password(password)?;

        let user =
            match user_repo::create_user(&self.pool, name, username, &password_hash, bio).await {
                Ok(user) => user,
                // Lost the race with a concurrent registration of the same name.
                Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                    return Err(AppError::Conflict("Username already taken".to_string()));
                }
                Err(e) => return Err(e.into()),
            };

        tracing::info!("User registered: {}", user.id);
        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown usernames and wrong passwords share one error message so the
    /// response does not reveal which usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User)> {
        let user = user_repo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("incorrect username or password".to_string())
            })?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Authentication(
                "incorrect username or password".to_string(),
            ));
        }

        let token = generate_token(
            user.id,
            &user.username,
            &self.jwt_secret,
            self.jwt_expiry_hours,
        )?;

        tracing::info!("User logged in: {}", user.id);
        Ok((token, user))
    }
}
