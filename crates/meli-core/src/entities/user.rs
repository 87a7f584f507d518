//! User and account entities
//!
//! A [`User`] is the lightweight social-graph identity that follow edges and
//! posts point at. An [`Account`] is the credential-bearing identity created at
//! registration. Every account has a user with the same id, name and seller
//! flag; the stores create both in the same critical section and nothing
//! mutates those three fields afterwards.

use chrono::{DateTime, Utc};

/// Social-graph identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub is_seller: bool,
}

impl User {
    /// Create a new User
    pub fn new(id: i64, name: impl Into<String>, is_seller: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_seller,
        }
    }
}

/// Authentication identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    /// Stored normalized (trimmed, lowercase)
    pub email: String,
    pub is_seller: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub password_hash: String,
}

impl Account {
    /// The social-graph user this account is paired with
    pub fn as_user(&self) -> User {
        User::new(self.id, self.name.clone(), self.is_seller)
    }

    /// Update the avatar
    pub fn set_avatar(&mut self, avatar_url: impl Into<String>) {
        self.avatar_url = Some(avatar_url.into());
    }
}

/// Normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
