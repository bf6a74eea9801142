//! User database model

use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password_hash: String,
    pub role: String,
    pub active: bool,
}
