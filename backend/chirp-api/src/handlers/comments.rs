/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::ContentService;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Create a comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    post_id: web::Path<i64>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    let comment = service
        .create_comment(user_id.0, *post_id, &req.content)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Delete a comment; only the author may do this
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    comment_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    service.delete_comment(user_id.0, *comment_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
