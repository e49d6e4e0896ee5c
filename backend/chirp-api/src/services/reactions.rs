/// Reaction service - likes on posts and comments
use std::collections::HashMap;

use sqlx::PgPool;

use crate::db::{comment_repo, follow_repo, like_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::LikeEntry;
use crate::services::ownership::ResourceKind;

#[derive(Clone)]
pub struct ReactionService {
    pool: PgPool,
}

impl ReactionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Like a target. Liking twice is a no-op; self-likes are permitted.
    pub async fn like(&self, kind: ResourceKind, target_id: i64, user_id: i64) -> Result<()> {
        self.ensure_target_exists(kind, target_id).await?;

        let created = match kind {
            ResourceKind::Post => like_repo::like_post(&self.pool, user_id, target_id).await?,
            ResourceKind::Comment => {
                like_repo::like_comment(&self.pool, user_id, target_id).await?
            }
        };

        if created {
            tracing::info!("User {} liked {} {}", user_id, kind.as_str(), target_id);
        } else {
            tracing::debug!(
                "User {} already liked {} {}",
                user_id,
                kind.as_str(),
                target_id
            );
        }

        Ok(())
    }

    /// Remove a like. Removing one that does not exist succeeds.
    pub async fn unlike(&self, kind: ResourceKind, target_id: i64, user_id: i64) -> Result<()> {
        let removed = match kind {
            ResourceKind::Post => like_repo::unlike_post(&self.pool, user_id, target_id).await?,
            ResourceKind::Comment => {
                like_repo::unlike_comment(&self.pool, user_id, target_id).await?
            }
        };

        if removed {
            tracing::info!("User {} unliked {} {}", user_id, kind.as_str(), target_id);
        }

        Ok(())
    }

    /// Who liked this target, each with their follower and following id sets.
    /// Ordered by like id, so the sequence is stable for a fixed snapshot.
    pub async fn list_likes(&self, kind: ResourceKind, target_id: i64) -> Result<Vec<LikeEntry>> {
        self.ensure_target_exists(kind, target_id).await?;

        let liker_ids: Vec<i64> = match kind {
            ResourceKind::Post => like_repo::list_post_likes(&self.pool, target_id)
                .await?
                .into_iter()
                .map(|like| like.user_id)
                .collect(),
            ResourceKind::Comment => like_repo::list_comment_likes(&self.pool, target_id)
                .await?
                .into_iter()
                .map(|like| like.user_id)
                .collect(),
        };

        if liker_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut users_by_id: HashMap<i64, _> = user_repo::find_by_ids(&self.pool, &liker_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut followers: HashMap<i64, Vec<i64>> = HashMap::new();
        for edge in follow_repo::list_edges_by_following(&self.pool, &liker_ids).await? {
            followers
                .entry(edge.following_id)
                .or_default()
                .push(edge.follower_id);
        }

        let mut following: HashMap<i64, Vec<i64>> = HashMap::new();
        for edge in follow_repo::list_edges_by_followers(&self.pool, &liker_ids).await? {
            following
                .entry(edge.follower_id)
                .or_default()
                .push(edge.following_id);
        }

        let entries = liker_ids
            .into_iter()
            .filter_map(|id| users_by_id.remove(&id))
            .map(|user| LikeEntry {
                followers: followers.remove(&user.id).unwrap_or_default(),
                following: following.remove(&user.id).unwrap_or_default(),
                user: user.into(),
            })
            .collect();

        Ok(entries)
    }

    async fn ensure_target_exists(&self, kind: ResourceKind, target_id: i64) -> Result<()> {
        let exists = match kind {
            ResourceKind::Post => post_repo::exists(&self.pool, target_id).await?,
            ResourceKind::Comment => comment_repo::exists(&self.pool, target_id).await?,
        };

        if !exists {
            return Err(AppError::NotFound(format!("{} not found", kind.title())));
        }

        Ok(())
    }
}
