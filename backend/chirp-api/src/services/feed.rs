/// Feed service - composes the following feed
use sqlx::PgPool;

use crate::db::{follow_repo, post_repo};
use crate::error::Result;
use crate::models::PostSummary;
use crate::services::content;
use crate::services::DEFAULT_PAGE_SIZE;

#[derive(Clone)]
pub struct FeedService {
    pool: PgPool,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Latest posts from the users the caller follows, newest first.
    /// An empty follow set yields an empty page, never the global timeline.
    pub async fn following_feed(&self, caller_id: i64) -> Result<Vec<PostSummary>> {
        let following = follow_repo::list_following_ids(&self.pool, caller_id).await?;
        if following.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(
            "Composing feed for user {} from {} followed users",
            caller_id,
            following.len()
        );

        let posts =
            post_repo::list_recent_by_authors(&self.pool, &following, DEFAULT_PAGE_SIZE).await?;

        content::assemble_summaries(&self.pool, posts).await
    }
}
