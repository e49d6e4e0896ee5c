/// Chirp API Library
///
/// A single service backing a small social platform: users register and log in,
/// publish short posts, comment, like posts and comments, follow each other and
/// read a feed of the people they follow.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for users, posts, comments, likes and follows
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: HTTP middleware for authentication
/// - `security`: Password hashing and token handling
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
