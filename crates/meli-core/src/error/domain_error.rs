//! Domain errors - error kinds for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("ID must not be empty")]
    EmptyId,

    #[error("ID must be greater than zero")]
    NonPositiveId,

    #[error("Date must not be empty")]
    DateEmpty,

    #[error("Invalid date, expected dd-mm-yyyy")]
    DateFormat,

    #[error("Field must not be empty")]
    FieldEmpty,

    #[error("Length must not exceed {max} characters")]
    TextTooLong { max: usize },

    #[error("Field must not contain special characters")]
    SpecialCharacters,

    #[error("Category must not be empty")]
    CategoryEmpty,

    #[error("Price must not be empty")]
    PriceEmpty,

    #[error("Maximum price per product is 10.000.000")]
    PriceTooLarge,

    #[error("Discount must be greater than 0 and at most 100")]
    DiscountOutOfRange,

    #[error("Unknown sort order")]
    InvalidSortOrder,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Invalid credentials")]
    InvalidCredentials,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("Post not found: {0}")]
    PostNotFound(i64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailTaken,

    #[error("Post {0} belongs to another user")]
    PostForbidden(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::EmptyId => "EMPTY_ID",
            Self::NonPositiveId => "NON_POSITIVE_ID",
            Self::DateEmpty => "DATE_EMPTY",
            Self::DateFormat => "DATE_FORMAT",
            Self::FieldEmpty => "FIELD_EMPTY",
            Self::TextTooLong { .. } => "TEXT_TOO_LONG",
            Self::SpecialCharacters => "SPECIAL_CHARACTERS",
            Self::CategoryEmpty => "CATEGORY_EMPTY",
            Self::PriceEmpty => "PRICE_EMPTY",
            Self::PriceTooLarge => "PRICE_TOO_LARGE",
            Self::DiscountOutOfRange => "DISCOUNT_OUT_OF_RANGE",
            Self::InvalidSortOrder => "INVALID_SORT_ORDER",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",

            // Authorization
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::PostNotFound(_) => "UNKNOWN_POST",

            // Conflict
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::PostForbidden(_) => "POST_FORBIDDEN",

            // Infrastructure
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyId
                | Self::NonPositiveId
                | Self::DateEmpty
                | Self::DateFormat
                | Self::FieldEmpty
                | Self::TextTooLong { .. }
                | Self::SpecialCharacters
                | Self::CategoryEmpty
                | Self::PriceEmpty
                | Self::PriceTooLarge
                | Self::DiscountOutOfRange
                | Self::InvalidSortOrder
                | Self::InvalidEmail
                | Self::WeakPassword { .. }
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::AccountNotFound(_) | Self::PostNotFound(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailTaken | Self::PostForbidden(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this error came from the storage backend
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
