//! Authentication service
//!
//! Handles account registration and credential checks.

use meli_core::traits::AccountRepository;
use meli_core::validation::{validate_required_text, PASSWORD_MIN, USER_NAME_MAX};
use meli_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{AccountResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account and its social-graph user
    #[instrument(skip(self, request), fields(is_seller = request.is_seller))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AccountResponse> {
        let request = request.trimmed();

        validate_required_text(&request.name, USER_NAME_MAX)?;
        if request.email.is_empty() || request.validate().is_err() {
            return Err(DomainError::InvalidEmail.into());
        }
        if request.password.chars().count() < PASSWORD_MIN {
            return Err(DomainError::WeakPassword { min: PASSWORD_MIN }.into());
        }

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let account = self
            .ctx
            .store()
            .create_account(&request.name, &request.email, &password_hash, request.is_seller)
            .await?;

        info!(user_id = account.id, "Account registered");
        Ok(AccountResponse::from(account))
    }

    /// Check credentials; unknown email and wrong password fail the same way
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AccountResponse> {
        let account = self
            .ctx
            .store()
            .find_account_by_email(request.email.trim())
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let matches = self
            .ctx
            .password_service()
            .verify(&request.password, &account.password_hash)
            .unwrap_or_else(|e| {
                warn!(user_id = account.id, error = %e, "Stored password hash is unreadable");
                false
            });
        if !matches {
            return Err(DomainError::InvalidCredentials.into());
        }

        info!(user_id = account.id, "Login succeeded");
        Ok(AccountResponse::from(account))
    }
}
