/// Business logic layer for the Chirp API
///
/// - Auth service: registration, login, token issuance
/// - Content service: posts and comments, including the delete cascade
/// - Social graph service: follow edges and projections
/// - Reaction service: like edges for posts and comments
/// - Feed service: following-feed composition
/// - Ownership guard: explicit authorization for destructive calls
/// - User service: directory, profile, and search reads
pub mod auth;
pub mod content;
pub mod feed;
pub mod ownership;
pub mod reactions;
pub mod social_graph;
pub mod users;

// Re-export commonly used services
pub use auth::AuthService;
pub use content::ContentService;
pub use feed::FeedService;
pub use ownership::{authorize, ResourceKind};
pub use reactions::ReactionService;
pub use social_graph::SocialGraphService;
pub use users::UserService;

/// Fixed page size for every listing surface.
pub const DEFAULT_PAGE_SIZE: i64 = 20;
