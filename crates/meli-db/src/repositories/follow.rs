//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use tracing::{info, instrument};

use meli_core::traits::{FollowRepository, RepoResult};
use meli_core::User;

use crate::models::UserModel;

use super::error::map_db_error;
use super::PgStore;

#[async_trait]
impl FollowRepository for PgStore {
    #[instrument(skip(self))]
    async fn follow(&self, user_id: i64, seller_id: i64) -> RepoResult<()> {
        self.require_user(user_id).await?;
        self.require_user(seller_id).await?;

        let result = sqlx::query(
            r"
            INSERT INTO follows (user_id, seller_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, seller_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(seller_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            info!(user_id, seller_id, "Follow edge created");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, user_id: i64, seller_id: i64) -> RepoResult<()> {
        self.require_user(user_id).await?;
        self.require_user(seller_id).await?;

        let result = sqlx::query("DELETE FROM follows WHERE user_id = $1 AND seller_id = $2")
            .bind(user_id)
            .bind(seller_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            info!(user_id, seller_id, "Follow edge removed");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn followers_of(&self, seller_id: i64) -> RepoResult<Vec<User>> {
        self.require_user(seller_id).await?;

        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.name, u.is_seller
            FROM follows f
            JOIN users u ON u.id = f.user_id
            WHERE f.seller_id = $1
            ",
        )
        .bind(seller_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn followed_by(&self, user_id: i64) -> RepoResult<Vec<User>> {
        self.require_user(user_id).await?;

        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.name, u.is_seller
            FROM follows f
            JOIN users u ON u.id = f.seller_id
            WHERE f.user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
