//! Translation of storage failures into the domain taxonomy
//!
//! Raw `sqlx` errors never cross the repository boundary.

use pos_core::error::DomainError;
use pos_core::value_objects::{ProductId, UserId};
use sqlx::Error as SqlxError;

/// Wrap an unexpected storage failure
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Translate a unique-index violation, passing anything else through as a
/// storage failure
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => on_unique(),
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

pub fn product_not_found(id: ProductId) -> DomainError {
    DomainError::ProductNotFound(id)
}
