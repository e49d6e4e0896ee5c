use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registered account. `password_hash` never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Like edge on a post; unique per (user_id, post_id).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostLike {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Like edge on a comment; unique per (user_id, comment_id).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentLike {
    pub id: i64,
    pub user_id: i64,
    pub comment_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Follow edge; unique per ordered (follower_id, following_id) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Follow {
    pub id: i64,
    pub follower_id: i64,
    pub following_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user, safe to embed in any payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            name: user.name,
            username: user.username,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

/// User with their authored content, for profile and directory reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

/// Search hit: the user plus their follower/following id projections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub followers: Vec<i64>,
    pub following: Vec<i64>,
}

/// Listing/feed view of a post: author and likes joined, comments shallow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub author: UserView,
    pub likes: Vec<PostLike>,
    pub comments: Vec<Comment>,
}

/// Single-post view: comments carry their own author and likes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub author: UserView,
    pub likes: Vec<PostLike>,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDetail {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
    pub author: UserView,
    pub likes: Vec<CommentLike>,
}

/// One liker of a post or comment, with their social context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeEntry {
    pub user: UserView,
    pub followers: Vec<i64>,
    pub following: Vec<i64>,
}
