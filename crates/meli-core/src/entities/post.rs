//! Post entity - a seller's product publication

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::value_objects::final_price;

/// Product advertised by a post
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub product_type: String,
    pub brand: String,
    pub color: String,
    pub notes: String,
    pub image_url: Option<String>,
}

/// A validated post that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i64,
    pub date: NaiveDate,
    pub product: Product,
    pub category: i32,
    pub price: Decimal,
    pub has_promo: bool,
    pub discount: Decimal,
}

/// A stored post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub product: Product,
    pub category: i32,
    pub price: Decimal,
    pub has_promo: bool,
    pub discount: Decimal,
    pub final_price: Decimal,
}

impl Post {
    /// Materialize a stored post from its assigned id and content.
    ///
    /// `final_price` is always derived here, never taken from input.
    pub fn from_new(post_id: i64, new_post: NewPost) -> Self {
        let final_price = final_price(new_post.price, new_post.discount, new_post.has_promo);
        Self {
            post_id,
            user_id: new_post.user_id,
            date: new_post.date,
            product: new_post.product,
            category: new_post.category,
            price: new_post.price,
            has_promo: new_post.has_promo,
            discount: new_post.discount,
            final_price,
        }
    }
}
