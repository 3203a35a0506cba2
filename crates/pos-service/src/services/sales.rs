//! Sales service
//!
//! Records purchases atomically and scopes sale visibility by role.

use tracing::{info, instrument};
use validator::Validate;

use pos_core::entities::{CustomerIdentity, SaleItem};
use pos_core::error::DomainError;
use pos_core::traits::NewSale;
use pos_core::value_objects::{Capability, ProductId, Role, SaleId, ViewerContext};

use crate::dto::{
    CustomerIdentityRequest, PurchaseRequest, SaleDetailResponse, SaleLineResponse, SaleResponse,
    SaleSummaryResponse,
};

use super::access::require;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Sales service
pub struct SalesService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SalesService<'a> {
    /// Create a new SalesService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a purchase
    ///
    /// Line prices are read from the catalog at recording time; the request
    /// cannot name its own. The stock check runs again inside the recording
    /// transaction, so a concurrent purchase of the last units fails there
    /// instead of overselling.
    #[instrument(skip(self, viewer, request), fields(viewer_id = %viewer.user_id))]
    pub async fn purchase(
        &self,
        viewer: &ViewerContext,
        request: PurchaseRequest,
    ) -> ServiceResult<SaleResponse> {
        require(viewer, Capability::Purchase)?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let identity = resolve_identity(viewer, request.customer.as_ref())?;

        let mut items = Vec::with_capacity(request.lines.len());
        for line in &request.lines {
            let product_id = ProductId::new(line.product_id);
            let product = self
                .ctx
                .product_repo()
                .find_active(product_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Product", product_id.to_string()))?;

            if !product.has_stock(line.quantity) {
                return Err(ServiceError::Domain(DomainError::InsufficientStock {
                    product_id,
                    requested: line.quantity,
                    available: product.quantity,
                }));
            }

            items.push(SaleItem {
                product_id,
                quantity: line.quantity,
                price: product.price,
            });
        }

        let total = items.iter().map(SaleItem::subtotal).sum();

        let sale = NewSale {
            customer_name: identity.name,
            customer_email: identity.email,
            total,
            created_by: viewer.user_id,
            items,
        };

        let sale_id = self.ctx.sale_repo().record(&sale).await?;

        info!(sale_id = %sale_id, total = %sale.total, "Sale recorded");

        let recorded = self
            .ctx
            .sale_repo()
            .find_by_id(sale_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Recorded sale not found"))?;

        Ok(SaleResponse::from(&recorded))
    }

    /// List the sales visible to the viewer
    ///
    /// Staff see every sale annotated with the recording user's name;
    /// customers see their own purchases only.
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn list_sales(
        &self,
        viewer: &ViewerContext,
    ) -> ServiceResult<Vec<SaleSummaryResponse>> {
        if viewer.role.allows(Capability::ViewAllSales) {
            let summaries = self.ctx.sale_repo().list_all().await?;
            return Ok(summaries.iter().map(SaleSummaryResponse::from).collect());
        }

        let sales = self
            .ctx
            .sale_repo()
            .list_for_customer(&viewer.email)
            .await?;
        Ok(sales.iter().map(SaleSummaryResponse::from).collect())
    }

    /// Fetch one sale with its line items
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn sale_detail(
        &self,
        viewer: &ViewerContext,
        id: SaleId,
    ) -> ServiceResult<SaleDetailResponse> {
        let sale = self
            .ctx
            .sale_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sale", id.to_string()))?;

        if !viewer.role.allows(Capability::ViewAllSales) && sale.customer_email != viewer.email {
            return Err(ServiceError::permission_denied(
                "view sales of other customers",
            ));
        }

        let lines = self.ctx.sale_repo().line_items(id).await?;

        Ok(SaleDetailResponse {
            sale: SaleResponse::from(&sale),
            lines: lines.iter().map(SaleLineResponse::from).collect(),
        })
    }
}

/// Decide whose purchase this is
///
/// Customers always buy for themselves; a customer block naming a different
/// email is rejected. Staff may record a walk-in buyer by name and fall back
/// to their own identity when ringing something up for themselves.
fn resolve_identity(
    viewer: &ViewerContext,
    customer: Option<&CustomerIdentityRequest>,
) -> ServiceResult<CustomerIdentity> {
    match customer {
        None => Ok(CustomerIdentity::new(
            viewer.display_name.clone(),
            viewer.email.clone(),
        )),
        Some(c) => {
            if viewer.role == Role::Customer && c.email != viewer.email {
                return Err(ServiceError::permission_denied(
                    "record sales for another customer",
                ));
            }
            Ok(CustomerIdentity::new(c.name.clone(), c.email.clone()))
        }
    }
}
