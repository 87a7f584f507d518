//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use tracing::{info, instrument};

use meli_core::traits::{AccountRepository, RepoResult};
use meli_core::{normalize_email, Account, DomainError, User, UserOrder};

use crate::models::{AccountModel, UserModel};

use super::error::{map_db_error, map_unique_violation};
use super::PgStore;

const EMAIL_INDEX: &str = "users_email_key";

const ACCOUNT_COLUMNS: &str =
    "id, name, email, is_seller, avatar_url, created_at, password_hash";

impl PgStore {
    /// Insert users with fixed IDs, leaving existing rows untouched.
    ///
    /// The ID sequence is then moved past the highest stored ID so later
    /// creations never collide with a seeded row.
    #[instrument(skip(self, users))]
    pub async fn seed_users(&self, users: &[User]) -> RepoResult<()> {
        for user in users {
            sqlx::query(
                r"
                INSERT INTO users (id, name, is_seller)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO NOTHING
                ",
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(user.is_seller)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        }

        sqlx::query(
            r"
            SELECT setval(pg_get_serial_sequence('users', 'id'), MAX(id))
            FROM users
            HAVING MAX(id) IS NOT NULL
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(count = users.len(), "Users seeded");
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_user(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            "SELECT id, name, is_seller FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list_users(&self, order: UserOrder) -> RepoResult<Vec<User>> {
        let query = if order == UserOrder::NameDesc {
            "SELECT id, name, is_seller FROM users ORDER BY LOWER(name) DESC, id"
        } else {
            "SELECT id, name, is_seller FROM users ORDER BY LOWER(name) ASC, id"
        };

        let rows = sqlx::query_as::<_, UserModel>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn create_user(&self, name: &str, is_seller: bool) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (name, is_seller)
            VALUES ($1, $2)
            RETURNING id, name, is_seller
            ",
        )
        .bind(name)
        .bind(is_seller)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(user_id = row.id, "Catalog user created");
        Ok(User::from(row))
    }

    #[instrument(skip(self))]
    async fn find_account(&self, id: i64) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = $1 AND email IS NOT NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn find_account_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE LOWER(email) = $1"
        ))
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        is_seller: bool,
    ) -> RepoResult<Account> {
        let email = normalize_email(email);
        if self.find_account_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailTaken);
        }

        let row = sqlx::query_as::<_, AccountModel>(&format!(
            r"
            INSERT INTO users (name, email, password_hash, is_seller, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING {ACCOUNT_COLUMNS}
            "
        ))
        .bind(name)
        .bind(&email)
        .bind(password_hash)
        .bind(is_seller)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, EMAIL_INDEX, || DomainError::EmailTaken))?;

        info!(user_id = row.id, "Account created");
        Ok(Account::from(row))
    }

    #[instrument(skip(self))]
    async fn update_avatar(&self, user_id: i64, avatar_url: &str) -> RepoResult<Account> {
        let row = sqlx::query_as::<_, AccountModel>(&format!(
            r"
            UPDATE users
            SET avatar_url = $2
            WHERE id = $1 AND email IS NOT NULL
            RETURNING {ACCOUNT_COLUMNS}
            "
        ))
        .bind(user_id)
        .bind(avatar_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Account::from)
            .ok_or(DomainError::AccountNotFound(user_id))
    }
}
