//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{info, instrument};

use meli_core::traits::{PostRepository, RepoResult};
use meli_core::{DomainError, NewPost, Post};

use crate::mappers::PostInsert;
use crate::models::PostModel;

use super::error::map_db_error;
use super::PgStore;

const POST_COLUMNS: &str = r"
    id, user_id, date, product_id, product_name, product_type, brand, color,
    notes, image_url, category, price, has_promo, discount
";

#[async_trait]
impl PostRepository for PgStore {
    #[instrument(skip(self, post), fields(user_id = post.user_id))]
    async fn add_post(&self, post: NewPost) -> RepoResult<i64> {
        self.require_user(post.user_id).await?;

        let insert = PostInsert::new(&post);
        let post_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO posts (
                user_id, date, product_id, product_name, product_type, brand, color,
                notes, image_url, category, price, has_promo, discount
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            ",
        )
        .bind(insert.user_id)
        .bind(insert.date)
        .bind(insert.product_id)
        .bind(insert.product_name)
        .bind(insert.product_type)
        .bind(insert.brand)
        .bind(insert.color)
        .bind(insert.notes)
        .bind(insert.image_url)
        .bind(insert.category)
        .bind(insert.price)
        .bind(insert.has_promo)
        .bind(insert.discount)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(post_id, "Post stored");
        Ok(post_id)
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, user_id: i64, post_id: i64) -> RepoResult<()> {
        self.require_user(user_id).await?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            info!(post_id, "Post deleted");
            return Ok(());
        }

        // Nothing deleted: either the post is missing or someone else owns it
        let owner = sqlx::query_scalar::<_, i64>("SELECT user_id FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match owner {
            None => Err(DomainError::PostNotFound(post_id)),
            Some(_) => Err(DomainError::PostForbidden(post_id)),
        }
    }

    #[instrument(skip(self))]
    async fn posts_from_sellers_since(
        &self,
        seller_ids: &[i64],
        since: NaiveDate,
    ) -> RepoResult<Vec<Post>> {
        if seller_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE date >= $1 AND user_id = ANY($2)"
        ))
        .bind(since)
        .bind(seller_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn promo_posts_by_seller(&self, seller_id: i64) -> RepoResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1 AND has_promo"
        ))
        .bind(seller_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn posts_by_user(&self, user_id: i64) -> RepoResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}
