/// HTTP handlers for the Chirp API
///
/// This module contains handlers for:
/// - Auth: registration and login
/// - Users: listings, profiles, search and follow edges
/// - Posts and comments: create, read, delete
/// - Likes: react to posts and comments
/// - Feed: the caller's following feed
pub mod auth;
pub mod comments;
pub mod feed;
pub mod follows;
pub mod health;
pub mod likes;
pub mod posts;
pub mod users;

// Re-export handler functions at module level
pub use auth::{login, register};
pub use comments::{create_comment, delete_comment};
pub use feed::following_feed;
pub use follows::{follow_user, list_followers, list_following, unfollow_user};
pub use health::{health_check, liveness_check, readiness_check};
pub use likes::{
    like_comment, like_post, list_comment_likes, list_post_likes, unlike_comment, unlike_post,
};
pub use posts::{create_post, delete_post, get_post, list_posts};
pub use users::{get_user, list_users, search_users};
