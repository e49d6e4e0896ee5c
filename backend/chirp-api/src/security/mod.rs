/// Security primitives: Argon2id password hashing and HS256 bearer tokens.
pub mod jwt;
pub mod password;

pub use jwt::{decode_token, generate_token, Claims};
pub use password::{hash_password, verify_password};
