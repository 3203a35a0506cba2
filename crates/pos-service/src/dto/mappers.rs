//! Mappers from domain entities to response DTOs

use pos_core::entities::{Product, Sale, SaleLine, SaleSummary, User};

use super::responses::{
    ProductResponse, SaleLineResponse, SaleResponse, SaleSummaryResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            middle_name: user.middle_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
            birthday: user.birthday,
            age: user.age,
            address: user.address.clone(),
            email: user.email.clone(),
            role: user.role,
            is_locked: user.is_locked,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Product Mappers
// ============================================================================

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            quantity: product.quantity,
            price: product.price,
            created_at: product.created_at,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}

// ============================================================================
// Sale Mappers
// ============================================================================

impl From<&Sale> for SaleResponse {
    fn from(sale: &Sale) -> Self {
        Self {
            id: sale.id.to_string(),
            customer_name: sale.customer_name.clone(),
            customer_email: sale.customer_email.clone(),
            total: sale.total,
            created_by: sale.created_by.map(|id| id.to_string()),
            created_at: sale.created_at,
        }
    }
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self::from(&sale)
    }
}

impl From<&SaleSummary> for SaleSummaryResponse {
    fn from(summary: &SaleSummary) -> Self {
        Self {
            id: summary.sale.id.to_string(),
            customer_name: summary.sale.customer_name.clone(),
            customer_email: summary.sale.customer_email.clone(),
            total: summary.sale.total,
            created_by: summary.sale.created_by.map(|id| id.to_string()),
            created_at: summary.sale.created_at,
            recorded_by: summary.recorded_by.clone(),
        }
    }
}

/// Customer-facing summary of an own purchase; the recording user stays
/// hidden
impl From<&Sale> for SaleSummaryResponse {
    fn from(sale: &Sale) -> Self {
        Self {
            id: sale.id.to_string(),
            customer_name: sale.customer_name.clone(),
            customer_email: sale.customer_email.clone(),
            total: sale.total,
            created_by: None,
            created_at: sale.created_at,
            recorded_by: None,
        }
    }
}

impl From<&SaleLine> for SaleLineResponse {
    fn from(line: &SaleLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            product_name: line.product_name.clone(),
            product_sku: line.product_sku.clone(),
            quantity: line.quantity,
            price: line.price,
            subtotal: line.subtotal(),
        }
    }
}
