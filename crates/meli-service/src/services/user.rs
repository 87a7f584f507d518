//! User service
//!
//! Follow graph operations, user listings and profile aggregation.

use meli_core::traits::{AccountRepository, FollowRepository, PostRepository};
use meli_core::validation::{
    validate_id, validate_post_order, validate_required_text, validate_user_order, USER_NAME_MAX,
};
use meli_core::{DomainError, User};
use tracing::{debug, info, instrument};

use crate::dto::mappers::to_responses;
use crate::dto::{
    AccountResponse, CreateUserRequest, FollowedListResponse, FollowersCountResponse,
    FollowersListResponse, PostResponse, ProfileResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow a seller. Following yourself is rejected as a non-positive ID.
    #[instrument(skip(self))]
    pub async fn follow(&self, user_id: i64, seller_id: i64) -> ServiceResult<()> {
        validate_id(user_id)?;
        validate_id(seller_id)?;
        if user_id == seller_id {
            return Err(DomainError::NonPositiveId.into());
        }

        self.ctx.store().follow(user_id, seller_id).await?;
        info!(user_id, seller_id, "User followed seller");
        Ok(())
    }

    /// Stop following a seller
    #[instrument(skip(self))]
    pub async fn unfollow(&self, user_id: i64, seller_id: i64) -> ServiceResult<()> {
        validate_id(user_id)?;
        validate_id(seller_id)?;

        self.ctx.store().unfollow(user_id, seller_id).await?;
        info!(user_id, seller_id, "User unfollowed seller");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn followers_count(&self, seller_id: i64) -> ServiceResult<FollowersCountResponse> {
        validate_id(seller_id)?;
        let seller = self.resolve_user(seller_id).await?;
        let followers = self.ctx.store().followers_of(seller_id).await?;

        Ok(FollowersCountResponse {
            user_id: seller.id,
            user_name: seller.name,
            followers_count: followers.len(),
        })
    }

    #[instrument(skip(self))]
    pub async fn followers_list(
        &self,
        seller_id: i64,
        order: &str,
    ) -> ServiceResult<FollowersListResponse> {
        validate_id(seller_id)?;
        let order = validate_user_order(order)?;
        let seller = self.resolve_user(seller_id).await?;

        let mut followers = self.ctx.store().followers_of(seller_id).await?;
        order.sort(&mut followers);

        Ok(FollowersListResponse {
            user_id: seller.id,
            user_name: seller.name,
            followers: to_responses(followers),
        })
    }

    #[instrument(skip(self))]
    pub async fn followed_list(
        &self,
        user_id: i64,
        order: &str,
    ) -> ServiceResult<FollowedListResponse> {
        validate_id(user_id)?;
        let order = validate_user_order(order)?;
        let user = self.resolve_user(user_id).await?;

        let mut followed = self.ctx.store().followed_by(user_id).await?;
        order.sort(&mut followed);

        Ok(FollowedListResponse {
            user_id: user.id,
            user_name: user.name,
            followed: to_responses(followed),
        })
    }

    /// Every user, by name ascending unless `name_desc` is asked for
    #[instrument(skip(self))]
    pub async fn list_users(&self, order: &str) -> ServiceResult<Vec<UserResponse>> {
        let order = validate_user_order(order)?;
        let users = self.ctx.store().list_users(order).await?;
        Ok(to_responses(users))
    }

    /// Create a catalog user without credentials
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        validate_required_text(&request.name, USER_NAME_MAX)?;

        let user = self
            .ctx
            .store()
            .create_user(&request.name, request.is_seller)
            .await?;

        info!(user_id = user.id, "User created");
        Ok(UserResponse::from(user))
    }

    /// Account data with follower, followed and publication counts.
    ///
    /// Failures listing followers or followed sellers count as zero.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: i64) -> ServiceResult<ProfileResponse> {
        validate_id(user_id)?;
        let account = self
            .ctx
            .store()
            .find_account(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let followers_count = match self.ctx.store().followers_of(user_id).await {
            Ok(users) => users.len(),
            Err(e) => {
                debug!(error = %e, "Followers unavailable for profile");
                0
            }
        };
        let followed_count = match self.ctx.store().followed_by(user_id).await {
            Ok(users) => users.len(),
            Err(e) => {
                debug!(error = %e, "Followed sellers unavailable for profile");
                0
            }
        };
        let publications_count = self.ctx.store().posts_by_user(user_id).await?.len();

        Ok(ProfileResponse {
            user: AccountResponse::from(account),
            followers_count,
            followed_count,
            publications_count,
        })
    }

    /// A user's posts sorted by date, newest first by default
    #[instrument(skip(self))]
    pub async fn posts_by_user(&self, user_id: i64, order: &str) -> ServiceResult<Vec<PostResponse>> {
        validate_id(user_id)?;
        let order = validate_post_order(order)?;

        let mut posts = self.ctx.store().posts_by_user(user_id).await?;
        order.sort(&mut posts);
        Ok(to_responses(posts))
    }

    #[instrument(skip(self))]
    pub async fn update_avatar(&self, user_id: i64, avatar_url: &str) -> ServiceResult<AccountResponse> {
        validate_id(user_id)?;

        let account = self.ctx.store().update_avatar(user_id, avatar_url).await?;
        info!(user_id, "Avatar updated");
        Ok(AccountResponse::from(account))
    }

    async fn resolve_user(&self, user_id: i64) -> ServiceResult<User> {
        Ok(self
            .ctx
            .store()
            .find_user(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }
}
