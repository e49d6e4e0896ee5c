/// Feed handlers - the caller's following feed
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::FeedService;

/// Latest posts from the users the caller follows
pub async fn following_feed(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let service = FeedService::new((**pool).clone());
    let feed = service.following_feed(user_id.0).await?;

    Ok(HttpResponse::Ok().json(feed))
}
