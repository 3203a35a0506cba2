//! Product entity - one catalog row
//!
//! Products are soft-deleted: `is_deleted` hides a row from active reads
//! while sale line items recorded against it stay resolvable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::value_objects::ProductId;

/// Catalog product with stock level and soft-delete flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: Decimal,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product still appears in active reads
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Whether current stock covers the requested quantity
    #[inline]
    pub fn has_stock(&self, requested: i64) -> bool {
        requested <= self.quantity
    }
}
