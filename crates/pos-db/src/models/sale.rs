//! Sale database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for sales table
#[derive(Debug, Clone, FromRow)]
pub struct SaleModel {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub total: String,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Sale row joined with the recording user's name for the staff view
#[derive(Debug, Clone, FromRow)]
pub struct SaleWithCreatorModel {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub total: String,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub creator_first_name: Option<String>,
    pub creator_last_name: Option<String>,
}

/// Sale item joined with current product name/sku at read time
#[derive(Debug, Clone, FromRow)]
pub struct SaleLineModel {
    pub product_id: i64,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i64,
    pub price: String,
}
