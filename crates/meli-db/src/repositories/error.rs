//! Error handling utilities for repositories

use meli_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Map a violation of the unique index `constraint` via `on_unique`
pub fn map_unique_violation<F>(e: SqlxError, constraint: &str, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(constraint) {
            return on_unique();
        }
    }
    map_db_error(e)
}
