/// Like handlers - HTTP endpoints for post and comment reactions
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::{ReactionService, ResourceKind};

/// Like a post
pub async fn like_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ReactionService::new((**pool).clone());
    service
        .like(ResourceKind::Post, *post_id, user_id.0)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Remove a like from a post
pub async fn unlike_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ReactionService::new((**pool).clone());
    service
        .unlike(ResourceKind::Post, *post_id, user_id.0)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Who liked a post, with each liker's follow edges
pub async fn list_post_likes(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ReactionService::new((**pool).clone());
    let likes = service.list_likes(ResourceKind::Post, *post_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

/// Like a comment
pub async fn like_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    comment_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ReactionService::new((**pool).clone());
    service
        .like(ResourceKind::Comment, *comment_id, user_id.0)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Remove a like from a comment
pub async fn unlike_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    comment_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ReactionService::new((**pool).clone());
    service
        .unlike(ResourceKind::Comment, *comment_id, user_id.0)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Who liked a comment, with each liker's follow edges
pub async fn list_comment_likes(
    pool: web::Data<PgPool>,
    comment_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ReactionService::new((**pool).clone());
    let likes = service.list_likes(ResourceKind::Comment, *comment_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}
