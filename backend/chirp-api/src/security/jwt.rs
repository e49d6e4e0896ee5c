/// HS256 bearer token issuance and validation
use crate::error::{AppError, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String, // token id
}

pub fn generate_token(
    user_id: i64,
    username: &str,
    secret: &str,
    expiry_hours: i64,
) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(expiry_hours)).timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AppError::Internal("Failed to generate token".to_string()))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = generate_token(42, "alice", SECRET, 1).expect("should generate token");
        let claims = decode_token(&token, SECRET).expect("should decode token");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = generate_token(42, "alice", SECRET, 1).expect("should generate token");
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = generate_token(42, "alice", SECRET, -2).expect("should generate token");
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn test_tokens_carry_unique_ids() {
        let a = generate_token(1, "alice", SECRET, 1).expect("token");
        let b = generate_token(1, "alice", SECRET, 1).expect("token");
        let ca = decode_token(&a, SECRET).expect("claims");
        let cb = decode_token(&b, SECRET).expect("claims");
        assert_ne!(ca.jti, cb.jti);
    }
}
