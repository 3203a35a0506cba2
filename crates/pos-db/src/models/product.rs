//! Product database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for products table
///
/// `price` is canonical decimal text; SQLite has no exact decimal type.
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}
