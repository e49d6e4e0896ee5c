/// Explicit ownership guard for destructive operations
use sqlx::PgPool;

use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};

/// The two resource kinds a caller can delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Post,
    Comment,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Post => "post",
            ResourceKind::Comment => "comment",
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            ResourceKind::Post => "Post",
            ResourceKind::Comment => "Comment",
        }
    }
}

/// Check that `caller_id` owns the resource before a destructive call.
///
/// Absence of the resource is `NotFound`; a different author is
/// `Authorization`. Read paths never call this.
pub async fn authorize(
    pool: &PgPool,
    kind: ResourceKind,
    resource_id: i64,
    caller_id: i64,
) -> Result<()> {
    let author_id = match kind {
        ResourceKind::Post => post_repo::find_by_id(pool, resource_id)
            .await?
            .map(|post| post.author_id),
        ResourceKind::Comment => comment_repo::find_by_id(pool, resource_id)
            .await?
            .map(|comment| comment.author_id),
    };

    match author_id {
        None => Err(AppError::NotFound(format!("{} not found", kind.title()))),
        Some(owner) if owner != caller_id => Err(AppError::Authorization(format!(
            "You can only delete your own {}s",
            kind.as_str()
        ))),
        Some(_) => Ok(()),
    }
}
