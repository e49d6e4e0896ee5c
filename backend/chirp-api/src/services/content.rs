/// Content service - posts and comments, including the delete cascade
use std::collections::HashMap;

use sqlx::PgPool;

use crate::db::{comment_repo, like_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, CommentDetail, CommentLike, Post, PostDetail, PostLike, PostSummary, UserView};
use crate::services::ownership::{self, ResourceKind};
use crate::services::DEFAULT_PAGE_SIZE;

#[derive(Clone)]
pub struct ContentService {
    pool: PgPool,
}

impl ContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post and return it joined with its author and empty
    /// comment/like lists.
    pub async fn create_post(&self, author_id: i64, content: &str) -> Result<PostDetail> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("content is required".to_string()));
        }

        let author = user_repo::find_by_id(&self.pool, author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

        let post = post_repo::create_post(&self.pool, author_id, content).await?;
        tracing::info!("Post {} created by user {}", post.id, author_id);

        Ok(PostDetail {
            id: post.id,
            content: post.content,
            author_id: post.author_id,
            created_at: post.created_at,
            author: author.into(),
            likes: Vec::new(),
            comments: Vec::new(),
        })
    }

    /// Single-post view: author and likes joined, comments carrying their own
    /// authors and likes.
    pub async fn get_post(&self, post_id: i64) -> Result<Option<PostDetail>> {
        let post = match post_repo::find_by_id(&self.pool, post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let comments = comment_repo::list_by_post(&self.pool, post_id).await?;
        let likes = like_repo::list_post_likes(&self.pool, post_id).await?;

        let comment_ids: Vec<i64> = comments.iter().map(|c| c.id).collect();
        let comment_likes = like_repo::list_likes_for_comments(&self.pool, &comment_ids).await?;
        let mut likes_by_comment: HashMap<i64, Vec<CommentLike>> = HashMap::new();
        for like in comment_likes {
            likes_by_comment
                .entry(like.comment_id)
                .or_default()
                .push(like);
        }

        let mut author_ids: Vec<i64> = comments.iter().map(|c| c.author_id).collect();
        author_ids.push(post.author_id);
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors = fetch_author_views(&self.pool, &author_ids).await?;

        let author = author_view(&authors, post.author_id)?;
        let comments = comments
            .into_iter()
            .map(|comment| {
                let author = author_view(&authors, comment.author_id)?;
                Ok(CommentDetail {
                    id: comment.id,
                    content: comment.content,
                    author_id: comment.author_id,
                    post_id: comment.post_id,
                    created_at: comment.created_at,
                    author,
                    likes: likes_by_comment.remove(&comment.id).unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(PostDetail {
            id: post.id,
            content: post.content,
            author_id: post.author_id,
            created_at: post.created_at,
            author,
            likes,
            comments,
        }))
    }

    /// Listing view, most recent first, fixed page size.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        let posts = post_repo::list_recent(&self.pool, DEFAULT_PAGE_SIZE).await?;
        assemble_summaries(&self.pool, posts).await
    }

    /// Delete a post and its comments as one transaction. The caller must
    /// own the post.
    pub async fn delete_post(&self, caller_id: i64, post_id: i64) -> Result<()> {
        ownership::authorize(&self.pool, ResourceKind::Post, post_id, caller_id).await?;

        // Comments go first; the FK on comments.post_id blocks the post
        // delete while any remain.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Post {} deleted by user {}", post_id, caller_id);
        Ok(())
    }

    /// Create a comment under an existing post.
    pub async fn create_comment(
        &self,
        author_id: i64,
        post_id: i64,
        content: &str,
    ) -> Result<CommentDetail> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("content is required".to_string()));
        }

        if !post_repo::exists(&self.pool, post_id).await? {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let author = user_repo::find_by_id(&self.pool, author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

        let comment = comment_repo::create_comment(&self.pool, author_id, post_id, content).await?;
        tracing::info!(
            "Comment {} created on post {} by user {}",
            comment.id,
            post_id,
            author_id
        );

        Ok(CommentDetail {
            id: comment.id,
            content: comment.content,
            author_id: comment.author_id,
            post_id: comment.post_id,
            created_at: comment.created_at,
            author: author.into(),
            likes: Vec::new(),
        })
    }

    /// Delete a comment. The caller must own it.
    pub async fn delete_comment(&self, caller_id: i64, comment_id: i64) -> Result<()> {
        ownership::authorize(&self.pool, ResourceKind::Comment, comment_id, caller_id).await?;
        comment_repo::delete_comment(&self.pool, comment_id).await?;

        tracing::info!("Comment {} deleted by user {}", comment_id, caller_id);
        Ok(())
    }
}

/// Batch-stitch the listing view: authors and likes joined, comments shallow.
/// Shared with the feed composer, which produces the same page shape.
pub(crate) async fn assemble_summaries(
    pool: &PgPool,
    posts: Vec<Post>,
) -> Result<Vec<PostSummary>> {
    if posts.is_empty() {
        return Ok(Vec::new());
    }

    let post_ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    let mut author_ids: Vec<i64> = posts.iter().map(|p| p.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();

    let authors = fetch_author_views(pool, &author_ids).await?;
    let likes = like_repo::list_likes_for_posts(pool, &post_ids).await?;
    let comments = comment_repo::list_by_posts(pool, &post_ids).await?;

    let mut likes_by_post: HashMap<i64, Vec<PostLike>> = HashMap::new();
    for like in likes {
        likes_by_post.entry(like.post_id).or_default().push(like);
    }
    let mut comments_by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
    for comment in comments {
        comments_by_post
            .entry(comment.post_id)
            .or_default()
            .push(comment);
    }

    posts
        .into_iter()
        .map(|post| {
            let author = author_view(&authors, post.author_id)?;
            Ok(PostSummary {
                id: post.id,
                content: post.content,
                author_id: post.author_id,
                created_at: post.created_at,
                author,
                likes: likes_by_post.remove(&post.id).unwrap_or_default(),
                comments: comments_by_post.remove(&post.id).unwrap_or_default(),
            })
        })
        .collect()
}

async fn fetch_author_views(pool: &PgPool, ids: &[i64]) -> Result<HashMap<i64, UserView>> {
    let users = user_repo::find_by_ids(pool, ids).await?;
    Ok(users
        .into_iter()
        .map(|user| (user.id, UserView::from(user)))
        .collect())
}

fn author_view(authors: &HashMap<i64, UserView>, author_id: i64) -> Result<UserView> {
    authors
        .get(&author_id)
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("author row missing: {}", author_id)))
}
