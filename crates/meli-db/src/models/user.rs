//! User and account database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Social-graph projection of the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub is_seller: bool,
}

/// Users row that carries credentials
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_seller: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub password_hash: String,
}
