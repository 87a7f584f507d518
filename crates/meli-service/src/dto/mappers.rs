//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use meli_core::validation::POST_DATE_FORMAT;
use meli_core::{Account, Post, Product, User};

use super::requests::ProductRequest;
use super::responses::{AccountResponse, PostResponse, ProductResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            user_name: user.name,
            is_seller: user.is_seller,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            user_id: account.id,
            user_name: account.name,
            email: account.email,
            is_seller: account.is_seller,
            avatar_url: account.avatar_url,
            created_at: account.created_at,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name,
            product_type: product.product_type,
            brand: product.brand,
            color: product.color,
            notes: product.notes,
            image_url: product.image_url,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id,
            user_id: post.user_id,
            date: post.date.format(POST_DATE_FORMAT).to_string(),
            product: post.product.into(),
            category: post.category,
            price: post.price,
            has_promo: post.has_promo,
            discount: post.discount,
            final_price: post.final_price,
        }
    }
}

impl From<ProductRequest> for Product {
    fn from(req: ProductRequest) -> Self {
        Self {
            product_id: req.product_id,
            product_name: req.product_name,
            product_type: req.product_type,
            brand: req.brand,
            color: req.color,
            notes: req.notes,
            image_url: req.image_url.filter(|url| !url.is_empty()),
        }
    }
}

/// Convert a list of entities into response DTOs
pub fn to_responses<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
