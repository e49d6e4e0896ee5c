/// Follow handlers - HTTP endpoints for the social graph
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::SocialGraphService;

/// Follow a user
pub async fn follow_user(
    pool: web::Data<PgPool>,
    user_id: UserId,
    target_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = SocialGraphService::new((**pool).clone());
    service.follow(user_id.0, *target_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Unfollow a user
pub async fn unfollow_user(
    pool: web::Data<PgPool>,
    user_id: UserId,
    target_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = SocialGraphService::new((**pool).clone());
    service.unfollow(user_id.0, *target_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Ids of users following the given user
pub async fn list_followers(
    pool: web::Data<PgPool>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = SocialGraphService::new((**pool).clone());
    let followers = service.list_followers(*user_id).await?;

    Ok(HttpResponse::Ok().json(followers))
}

/// Ids of users the given user follows
pub async fn list_following(
    pool: web::Data<PgPool>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = SocialGraphService::new((**pool).clone());
    let following = service.list_following(*user_id).await?;

    Ok(HttpResponse::Ok().json(following))
}
