//! Post database model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub product_id: i64,
    pub product_name: String,
    pub product_type: String,
    pub brand: String,
    pub color: String,
    pub notes: String,
    pub image_url: Option<String>,
    pub category: i32,
    pub price: Decimal,
    pub has_promo: bool,
    pub discount: Decimal,
}
