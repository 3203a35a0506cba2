//! Response DTOs for boundary endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are
//! serialized as strings and money values as decimal strings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use pos_core::value_objects::Role;

// ============================================================================
// User Responses
// ============================================================================

/// Account response
///
/// Credential material never appears here; the password hash stays inside
/// the storage layer.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub full_name: String,
    pub birthday: NaiveDate,
    pub age: i32,
    pub address: String,
    pub email: String,
    pub role: Role,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Product Responses
// ============================================================================

/// Active catalog product
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Sale Responses
// ============================================================================

/// Sale header
#[derive(Debug, Clone, Serialize)]
pub struct SaleResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Sale header for listings
///
/// `recorded_by` carries the recording user's display name in staff
/// listings and is absent in a customer's own history.
#[derive(Debug, Clone, Serialize)]
pub struct SaleSummaryResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_by: Option<String>,
}

/// One line of a sale with its price snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SaleLineResponse {
    pub product_id: String,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i64,
    pub price: Decimal,
    pub subtotal: Decimal,
}

/// Sale header with its line items
#[derive(Debug, Clone, Serialize)]
pub struct SaleDetailResponse {
    pub sale: SaleResponse,
    pub lines: Vec<SaleLineResponse>,
}
