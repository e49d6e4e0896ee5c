/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::ContentService;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

/// List the most recent posts
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    match service.get_post(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Create a new post authored by the caller
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    let post = service.create_post(user_id.0, &req.content).await?;

    Ok(HttpResponse::Created().json(post))
}

/// Delete a post; only the author may do this
pub async fn delete_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    service.delete_post(user_id.0, *post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
