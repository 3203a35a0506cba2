//! Model → entity mappers
//!
//! Conversions are fallible: stored role and decimal text can be corrupt,
//! and a corrupt row surfaces as a database error rather than a panic or a
//! silently truncated value.

mod product;
mod sale;
mod user;

use pos_core::DomainError;
use rust_decimal::Decimal;

/// Parse stored decimal text, reporting the row it came from on failure
pub(crate) fn parse_decimal(raw: &str, column: &str, row_id: i64) -> Result<Decimal, DomainError> {
    raw.parse::<Decimal>().map_err(|_| {
        DomainError::DatabaseError(format!("corrupt {column} value {raw:?} in row {row_id}"))
    })
}
