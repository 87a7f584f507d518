//! Response DTOs
//!
//! All response DTOs implement `Serialize`. Decimal amounts are emitted as
//! JSON numbers and post dates as `dd-mm-yyyy`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Social-graph user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub user_name: String,
    pub is_seller: bool,
}

/// Account data; the password hash is never part of it
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub user_id: i64,
    pub user_name: String,
    pub email: String,
    pub is_seller: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowersCountResponse {
    pub user_id: i64,
    pub user_name: String,
    pub followers_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowersListResponse {
    pub user_id: i64,
    pub user_name: String,
    pub followers: Vec<UserResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowedListResponse {
    pub user_id: i64,
    pub user_name: String,
    pub followed: Vec<UserResponse>,
}

/// Account plus follow-graph and publication counters
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: AccountResponse,
    pub followers_count: usize,
    pub followed_count: usize,
    pub publications_count: usize,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub product_id: i64,
    pub product_name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub brand: String,
    pub color: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub post_id: i64,
    pub user_id: i64,
    pub date: String,
    pub product: ProductResponse,
    pub category: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub has_promo: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,
}

/// Recent posts of the sellers a user follows
#[derive(Debug, Clone, Serialize)]
pub struct FollowedPostsResponse {
    pub user_id: i64,
    pub posts: Vec<PostResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromoCountResponse {
    pub user_id: i64,
    pub user_name: String,
    pub promo_products_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromoListResponse {
    pub user_id: i64,
    pub user_name: String,
    pub posts: Vec<PostResponse>,
}
