//! Inventory service
//!
//! Catalog browsing for every role, mutations for staff.

use rust_decimal::Decimal;
use tracing::{info, instrument};
use validator::Validate;

use pos_core::traits::{NewProduct, ProductChanges};
use pos_core::value_objects::{Capability, ProductId, ViewerContext};

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};

use super::access::require;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Inventory service
pub struct InventoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InventoryService<'a> {
    /// Create a new InventoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the active catalog
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn list_products(
        &self,
        viewer: &ViewerContext,
    ) -> ServiceResult<Vec<ProductResponse>> {
        require(viewer, Capability::BrowseCatalog)?;

        let products = self.ctx.product_repo().list_active().await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    /// Fetch one active product
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn get_product(
        &self,
        viewer: &ViewerContext,
        id: ProductId,
    ) -> ServiceResult<ProductResponse> {
        require(viewer, Capability::BrowseCatalog)?;

        let product = self
            .ctx
            .product_repo()
            .find_active(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id.to_string()))?;

        Ok(ProductResponse::from(&product))
    }

    /// Add a product to the catalog
    #[instrument(skip(self, viewer, request), fields(viewer_id = %viewer.user_id, sku = %request.sku))]
    pub async fn add_product(
        &self,
        viewer: &ViewerContext,
        request: CreateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        require(viewer, Capability::ManageInventory)?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let price = parse_price(&request.price)?;

        let new_product = NewProduct {
            name: request.name,
            sku: request.sku,
            quantity: request.quantity,
            price,
        };

        let product_id = self.ctx.product_repo().create(&new_product).await?;

        info!(product_id = %product_id, "Product added");

        let product = self
            .ctx
            .product_repo()
            .find_active(product_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Created product not found"))?;

        Ok(ProductResponse::from(&product))
    }

    /// Replace an active product's fields
    #[instrument(skip(self, viewer, request), fields(viewer_id = %viewer.user_id))]
    pub async fn update_product(
        &self,
        viewer: &ViewerContext,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        require(viewer, Capability::ManageInventory)?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let price = parse_price(&request.price)?;

        let changes = ProductChanges {
            name: request.name,
            sku: request.sku,
            quantity: request.quantity,
            price,
        };

        self.ctx.product_repo().update(id, &changes).await?;

        info!(product_id = %id, "Product updated");

        let product = self
            .ctx
            .product_repo()
            .find_active(id)
            .await?
            .ok_or_else(|| ServiceError::internal("Updated product not found"))?;

        Ok(ProductResponse::from(&product))
    }

    /// Retire a product from the catalog
    ///
    /// Idempotent: retiring an already retired or unknown product succeeds.
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn remove_product(&self, viewer: &ViewerContext, id: ProductId) -> ServiceResult<()> {
        require(viewer, Capability::ManageInventory)?;

        self.ctx.product_repo().soft_delete(id).await?;

        info!(product_id = %id, "Product retired");
        Ok(())
    }
}

/// Parse a client-supplied price string into a non-negative decimal
fn parse_price(raw: &str) -> ServiceResult<Decimal> {
    let price: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::validation("Price must be a decimal number"))?;

    if price.is_sign_negative() {
        return Err(ServiceError::validation("Price must not be negative"));
    }

    Ok(price)
}
