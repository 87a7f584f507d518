//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and each storage backend
//! (in-memory, PostgreSQL) provides an implementation. Backends must return
//! the same error kinds for the same inputs.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Account, NewPost, Post, User};
use crate::error::DomainError;
use crate::value_objects::UserOrder;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account / User Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find social-graph user by ID
    async fn find_user(&self, id: i64) -> RepoResult<Option<User>>;

    /// List all users by name, ignoring case. Only `NameDesc` reverses.
    async fn list_users(&self, order: UserOrder) -> RepoResult<Vec<User>>;

    /// Create a catalog-only user (no credentials)
    async fn create_user(&self, name: &str, is_seller: bool) -> RepoResult<User>;

    /// Find account by ID
    async fn find_account(&self, id: i64) -> RepoResult<Option<Account>>;

    /// Find account by email, ignoring case and surrounding whitespace
    async fn find_account_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    /// Create an account and its paired user under one ID.
    ///
    /// Fails with `EmailTaken` when the normalized email is registered.
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        is_seller: bool,
    ) -> RepoResult<Account>;

    /// Replace the avatar URL; fails with `AccountNotFound`
    async fn update_avatar(&self, user_id: i64, avatar_url: &str) -> RepoResult<Account>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert the edge user -> seller. Re-following is a no-op.
    async fn follow(&self, user_id: i64, seller_id: i64) -> RepoResult<()>;

    /// Remove the edge user -> seller. Missing edges are a no-op.
    async fn unfollow(&self, user_id: i64, seller_id: i64) -> RepoResult<()>;

    /// Users following `seller_id`, unordered
    async fn followers_of(&self, seller_id: i64) -> RepoResult<Vec<User>>;

    /// Users followed by `user_id`, unordered
    async fn followed_by(&self, user_id: i64) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a post and return its newly assigned ID
    async fn add_post(&self, post: NewPost) -> RepoResult<i64>;

    /// Delete a post owned by `user_id`.
    ///
    /// `UserNotFound` if the user is unknown, `PostNotFound` if no such post,
    /// `PostForbidden` if it belongs to someone else.
    async fn delete_post(&self, user_id: i64, post_id: i64) -> RepoResult<()>;

    /// Posts by any of `seller_ids` dated on or after `since`
    async fn posts_from_sellers_since(
        &self,
        seller_ids: &[i64],
        since: NaiveDate,
    ) -> RepoResult<Vec<Post>>;

    /// Promotional posts by one seller
    async fn promo_posts_by_seller(&self, seller_id: i64) -> RepoResult<Vec<Post>>;

    /// Every post by one user
    async fn posts_by_user(&self, user_id: i64) -> RepoResult<Vec<Post>>;
}

// ============================================================================
// Store
// ============================================================================

/// The full storage contract consumed by the services
pub trait Store: AccountRepository + FollowRepository + PostRepository {}

impl<T> Store for T where T: AccountRepository + FollowRepository + PostRepository {}
