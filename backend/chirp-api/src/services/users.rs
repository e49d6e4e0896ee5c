/// User directory service - listings, profiles and username search
use std::collections::HashMap;

use sqlx::PgPool;

use crate::db::{comment_repo, follow_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, Post, User, UserProfile, UserSearchResult};
use crate::services::DEFAULT_PAGE_SIZE;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recently registered users with their posts and comments.
    pub async fn list_users(&self) -> Result<Vec<UserProfile>> {
        let users = user_repo::list_recent(&self.pool, DEFAULT_PAGE_SIZE).await?;
        self.assemble_profiles(users).await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<UserProfile>> {
        let user = match user_repo::find_by_id(&self.pool, user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut profiles = self.assemble_profiles(vec![user]).await?;
        Ok(profiles.pop())
    }

    /// Case-insensitive substring match on username, with follow edges attached.
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::Validation("search query is required".to_string()));
        }

        let users = user_repo::search_by_username(&self.pool, query, DEFAULT_PAGE_SIZE).await?;
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i64> = users.iter().map(|user| user.id).collect();

        let mut followers: HashMap<i64, Vec<i64>> = HashMap::new();
        for edge in follow_repo::list_edges_by_following(&self.pool, &user_ids).await? {
            followers
                .entry(edge.following_id)
                .or_default()
                .push(edge.follower_id);
        }

        let mut following: HashMap<i64, Vec<i64>> = HashMap::new();
        for edge in follow_repo::list_edges_by_followers(&self.pool, &user_ids).await? {
            following
                .entry(edge.follower_id)
                .or_default()
                .push(edge.following_id);
        }

        let results = users
            .into_iter()
            .map(|user| UserSearchResult {
                followers: followers.remove(&user.id).unwrap_or_default(),
                following: following.remove(&user.id).unwrap_or_default(),
                id: user.id,
                name: user.name,
                username: user.username,
                bio: user.bio,
                created_at: user.created_at,
            })
            .collect();

        Ok(results)
    }

    async fn assemble_profiles(&self, users: Vec<User>) -> Result<Vec<UserProfile>> {
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i64> = users.iter().map(|user| user.id).collect();

        let mut posts_by_author: HashMap<i64, Vec<Post>> = HashMap::new();
        for post in post_repo::list_by_authors(&self.pool, &user_ids).await? {
            posts_by_author.entry(post.author_id).or_default().push(post);
        }

        let mut comments_by_author: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comment_repo::list_by_authors(&self.pool, &user_ids).await? {
            comments_by_author
                .entry(comment.author_id)
                .or_default()
                .push(comment);
        }

        let profiles = users
            .into_iter()
            .map(|user| UserProfile {
                posts: posts_by_author.remove(&user.id).unwrap_or_default(),
                comments: comments_by_author.remove(&user.id).unwrap_or_default(),
                id: user.id,
                name: user.name,
                username: user.username,
                bio: user.bio,
                created_at: user.created_at,
            })
            .collect();

        Ok(profiles)
    }
}
