/// Social graph service - follow edges and their projections
use sqlx::PgPool;

use crate::db::{follow_repo, user_repo};
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct SocialGraphService {
    pool: PgPool,
}

impl SocialGraphService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Follow a user. Re-following is a no-op; self-follow is permitted.
    pub async fn follow(&self, follower_id: i64, following_id: i64) -> Result<()> {
        if user_repo::find_by_id(&self.pool, following_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let created = follow_repo::create_follow(&self.pool, follower_id, following_id).await?;
        if created {
            tracing::info!("User {} followed user {}", follower_id, following_id);
        } else {
            tracing::debug!("User {} already follows user {}", follower_id, following_id);
        }

        Ok(())
    }

    /// Unfollow. Removing an edge that does not exist succeeds.
    pub async fn unfollow(&self, follower_id: i64, following_id: i64) -> Result<()> {
        let removed = follow_repo::delete_follow(&self.pool, follower_id, following_id).await?;
        if removed {
            tracing::info!("User {} unfollowed user {}", follower_id, following_id);
        }

        Ok(())
    }

    /// Ids of users the given user follows; feeds filter on this set.
    pub async fn list_following(&self, user_id: i64) -> Result<Vec<i64>> {
        Ok(follow_repo::list_following_ids(&self.pool, user_id).await?)
    }

    pub async fn list_followers(&self, user_id: i64) -> Result<Vec<i64>> {
        Ok(follow_repo::list_follower_ids(&self.pool, user_id).await?)
    }
}
