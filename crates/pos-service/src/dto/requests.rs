//! Request DTOs for boundary endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Self-service registration request
///
/// Accounts created this way are always customers; staff accounts come from
/// the admin directory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Middle name must be at most 100 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    /// Date of birth as `YYYY-MM-DD`
    pub birthday: String,

    #[validate(range(min = 0, max = 130, message = "Age must be 0-130"))]
    pub age: i32,

    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    pub address: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Administration Requests
// ============================================================================

/// Create user request (admin directory)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Middle name must be at most 100 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    /// Date of birth as `YYYY-MM-DD`
    pub birthday: String,

    #[validate(range(min = 0, max = 130, message = "Age must be 0-130"))]
    pub age: i32,

    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    pub address: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// One of `admin`, `seller`, `customer`
    pub role: String,
}

/// Update user request; replaces the whole profile, never the password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Middle name must be at most 100 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    /// Date of birth as `YYYY-MM-DD`
    pub birthday: String,

    #[validate(range(min = 0, max = 130, message = "Age must be 0-130"))]
    pub age: i32,

    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    pub address: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// One of `admin`, `seller`, `customer`
    pub role: String,
}

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Product name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 64, message = "SKU must be 1-64 characters"))]
    pub sku: String,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i64,

    /// Unit price as a decimal string, e.g. `"19.99"`
    pub price: String,
}

/// Update product request; replaces every field of an active product
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Product name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 64, message = "SKU must be 1-64 characters"))]
    pub sku: String,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i64,

    /// Unit price as a decimal string, e.g. `"19.99"`
    pub price: String,
}

// ============================================================================
// Purchase Requests
// ============================================================================

/// Buyer identity attached to a purchase
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerIdentityRequest {
    #[validate(length(min = 1, max = 200, message = "Customer name must be 1-200 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// One purchased product with its quantity
///
/// Prices are deliberately absent; the catalog price at recording time is
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PurchaseLine {
    pub product_id: i64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}

/// Purchase request
///
/// `customer` is optional: staff use it to record walk-in buyers, customers
/// omit it to buy under their own account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PurchaseRequest {
    #[validate(nested)]
    pub customer: Option<CustomerIdentityRequest>,

    #[validate(length(min = 1, message = "A sale needs at least one line item"), nested)]
    pub lines: Vec<PurchaseLine>,
}
