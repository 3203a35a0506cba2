//! Sale entities - immutable transaction records
//!
//! A sale and its line items are written once, in one transaction, and
//! never mutated. Line items copy the price observed at recording time, so
//! later product price changes cannot rewrite history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::value_objects::{ProductId, SaleId, UserId};

/// Sale header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub id: SaleId,
    pub customer_name: String,
    pub customer_email: String,
    pub total: Decimal,
    /// Recording user; `None` once that account has been hard-deleted
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

/// One persisted line of a sale, with the price snapshot taken at recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub price: Decimal,
}

impl SaleItem {
    /// quantity x snapshot price
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Line item joined with the current catalog entry for display
///
/// `product_name`/`product_sku` are read-time values; only `price` is
/// historical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i64,
    pub price: Decimal,
}

impl SaleLine {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Sale annotated with the recording staff member, for the staff history view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleSummary {
    pub sale: Sale,
    pub recorded_by: Option<String>,
}

/// Who the sale is for, independent of who records it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerIdentity {
    pub name: String,
    pub email: String,
}

impl CustomerIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
