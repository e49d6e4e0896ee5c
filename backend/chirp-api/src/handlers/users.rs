/// User directory handlers - listings, profiles and search
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::Result;
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// List recently registered users with their posts and comments
pub async fn list_users(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = UserService::new((**pool).clone());
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// Get a single user profile
pub async fn get_user(pool: web::Data<PgPool>, user_id: web::Path<i64>) -> Result<HttpResponse> {
    let service = UserService::new((**pool).clone());
    match service.get_user(*user_id).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Search users by username substring
pub async fn search_users(
    pool: web::Data<PgPool>,
    query: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    let service = UserService::new((**pool).clone());
    let results = service.search_users(query.q.as_deref().unwrap_or("")).await?;

    Ok(HttpResponse::Ok().json(results))
}
