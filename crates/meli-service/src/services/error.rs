//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use meli_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or store failure, passed through verbatim
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failure outside the domain (password hashing, backend setup)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The domain error kind, if this error carries one
    pub fn kind(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Internal(_) => None,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code an adapter should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    401
                } else if matches!(e, DomainError::PostForbidden(_)) {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::Internal(_) => 500,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
