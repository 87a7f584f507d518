//! Post model <-> entity mappers

use chrono::NaiveDate;
use meli_core::{NewPost, Post, Product};
use rust_decimal::Decimal;

use crate::models::PostModel;

/// Convert PostModel to Post entity, deriving the final price
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post::from_new(
            model.id,
            NewPost {
                user_id: model.user_id,
                date: model.date,
                product: Product {
                    product_id: model.product_id,
                    product_name: model.product_name,
                    product_type: model.product_type,
                    brand: model.brand,
                    color: model.color,
                    notes: model.notes,
                    image_url: model.image_url,
                },
                category: model.category,
                price: model.price,
                has_promo: model.has_promo,
                discount: model.discount,
            },
        )
    }
}

/// Column values for inserting a post
pub struct PostInsert<'a> {
    pub user_id: i64,
    pub date: NaiveDate,
    pub product_id: i64,
    pub product_name: &'a str,
    pub product_type: &'a str,
    pub brand: &'a str,
    pub color: &'a str,
    pub notes: &'a str,
    pub image_url: Option<&'a str>,
    pub category: i32,
    pub price: Decimal,
    pub has_promo: bool,
    pub discount: Decimal,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a NewPost) -> Self {
        Self {
            user_id: post.user_id,
            date: post.date,
            product_id: post.product.product_id,
            product_name: &post.product.product_name,
            product_type: &post.product.product_type,
            brand: &post.product.brand,
            color: &post.product.color,
            notes: &post.product.notes,
            image_url: post.product.image_url.as_deref(),
            category: post.category,
            price: post.price,
            has_promo: post.has_promo,
            discount: post.discount,
        }
    }
}
