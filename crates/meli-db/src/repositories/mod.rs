//! Repository implementations
//!
//! A single [`PgStore`] implements every repository trait defined in
//! meli-core, one module per trait.

mod account;
mod error;
mod follow;
mod post;

use meli_core::{DomainError, RepoResult};
use sqlx::PgPool;

use error::map_db_error;

/// PostgreSQL implementation of the storage contract
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new PgStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn user_exists(&self, id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn require_user(&self, id: i64) -> RepoResult<()> {
        if self.user_exists(id).await? {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(id))
        }
    }
}
