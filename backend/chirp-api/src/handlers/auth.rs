/// Authentication handlers - registration and login
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::UserView;
use crate::services::AuthService;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response with the bearer token and the authenticated user
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

/// Register a new user
pub async fn register(
    auth: web::Data<AuthService>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let name = req.name.trim();
    let username = req.username.trim();
    if name.is_empty() || username.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "name, username and password required".to_string(),
        ));
    }

    let user = auth
        .register(name, username, &req.password, req.bio.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(UserView::from(user)))
}

/// Exchange credentials for a bearer token
pub async fn login(
    auth: web::Data<AuthService>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "username and password required".to_string(),
        ));
    }

    let (token, user) = auth.login(username, &req.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: user.into(),
    }))
}
