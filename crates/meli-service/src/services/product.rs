//! Product service
//!
//! Publishing, listing and deleting posts.

use meli_core::validation::{
    parse_post_date, validate_category, validate_discount, validate_id,
    validate_optional_notes, validate_post_order, validate_price, validate_required_text,
    BRAND_MAX, COLOR_MAX, PRODUCT_NAME_MAX, PRODUCT_TYPE_MAX,
};
use meli_core::traits::{AccountRepository, FollowRepository, PostRepository};
use meli_core::{DomainError, NewPost, PostOrder, Product, User};
use tracing::{info, instrument};

use crate::dto::mappers::to_responses;
use crate::dto::{
    FollowedPostsResponse, PromoCountResponse, PromoListResponse, PublishPostRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and store a post, returning its new ID
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn publish(&self, request: PublishPostRequest) -> ServiceResult<i64> {
        validate_id(request.user_id)?;
        let date = parse_post_date(&request.date)?;

        let product = Product::from(request.product);
        validate_product(&product)?;
        validate_category(request.category)?;
        validate_price(request.price)?;
        let discount = validate_discount(request.has_promo, request.discount)?;

        let post_id = self
            .ctx
            .store()
            .add_post(NewPost {
                user_id: request.user_id,
                date,
                product,
                category: request.category,
                price: request.price,
                has_promo: request.has_promo,
                discount,
            })
            .await?;

        info!(post_id, "Post published");
        Ok(post_id)
    }

    /// Posts from followed sellers within the feed window
    #[instrument(skip(self))]
    pub async fn followed_last_two_weeks(
        &self,
        user_id: i64,
        order: &str,
    ) -> ServiceResult<FollowedPostsResponse> {
        validate_id(user_id)?;
        let order = validate_post_order(order)?;

        let seller_ids: Vec<i64> = self
            .ctx
            .store()
            .followed_by(user_id)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();

        let since = self.ctx.feed_since()?;
        let mut posts = self
            .ctx
            .store()
            .posts_from_sellers_since(&seller_ids, since)
            .await?;
        order.sort(&mut posts);

        Ok(FollowedPostsResponse {
            user_id,
            posts: to_responses(posts),
        })
    }

    /// Number of promotional posts by a seller
    #[instrument(skip(self))]
    pub async fn promo_count(&self, user_id: i64) -> ServiceResult<PromoCountResponse> {
        let user = self.resolve_user(user_id).await?;
        let posts = self.ctx.store().promo_posts_by_seller(user_id).await?;

        Ok(PromoCountResponse {
            user_id: user.id,
            user_name: user.name,
            promo_products_count: posts.len(),
        })
    }

    /// Promotional posts by a seller, newest first
    #[instrument(skip(self))]
    pub async fn promo_list(&self, user_id: i64) -> ServiceResult<PromoListResponse> {
        let user = self.resolve_user(user_id).await?;
        let mut posts = self.ctx.store().promo_posts_by_seller(user_id).await?;
        PostOrder::DateDesc.sort(&mut posts);

        Ok(PromoListResponse {
            user_id: user.id,
            user_name: user.name,
            posts: to_responses(posts),
        })
    }

    /// Delete one of the caller's own posts
    #[instrument(skip(self))]
    pub async fn delete_my_post(&self, user_id: i64, post_id: i64) -> ServiceResult<()> {
        validate_id(user_id)?;
        validate_id(post_id)?;

        self.ctx.store().delete_post(user_id, post_id).await?;
        info!(post_id, "Post deleted by owner");
        Ok(())
    }

    async fn resolve_user(&self, user_id: i64) -> ServiceResult<User> {
        validate_id(user_id)?;
        Ok(self
            .ctx
            .store()
            .find_user(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }
}

fn validate_product(product: &Product) -> Result<(), DomainError> {
    validate_id(product.product_id)?;
    validate_required_text(&product.product_name, PRODUCT_NAME_MAX)?;
    validate_required_text(&product.product_type, PRODUCT_TYPE_MAX)?;
    validate_required_text(&product.brand, BRAND_MAX)?;
    validate_required_text(&product.color, COLOR_MAX)?;
    validate_optional_notes(&product.notes)
}
