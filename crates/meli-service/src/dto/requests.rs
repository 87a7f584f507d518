//! Request DTOs
//!
//! Field rules live in the services, which report typed domain errors. Only
//! the email syntax check is declared here.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Product block of a publish payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    #[serde(rename = "type", default)]
    pub product_type: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Publish a post, promotional or not
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublishPostRequest {
    #[serde(default)]
    pub user_id: i64,
    /// `dd-mm-yyyy`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub product: ProductRequest,
    #[serde(default)]
    pub category: i32,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub price: Decimal,
    #[serde(default)]
    pub has_promo: bool,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub discount: Decimal,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create a catalog user without credentials
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(alias = "user_name")]
    pub name: String,
    #[serde(default)]
    pub is_seller: bool,
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,

    #[serde(default)]
    pub is_seller: bool,
}

impl RegisterRequest {
    /// Copy with name and email trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            is_seller: self.is_seller,
        }
    }
}

/// Account login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
