//! Sale model → entity mappers

use pos_core::entities::{Sale, SaleLine, SaleSummary};
use pos_core::error::DomainError;
use pos_core::value_objects::{ProductId, SaleId, UserId};

use crate::models::{SaleLineModel, SaleModel, SaleWithCreatorModel};

use super::parse_decimal;

impl TryFrom<SaleModel> for Sale {
    type Error = DomainError;

    fn try_from(model: SaleModel) -> Result<Self, Self::Error> {
        let total = parse_decimal(&model.total, "total", model.id)?;

        Ok(Sale {
            id: SaleId::new(model.id),
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            total,
            created_by: model.created_by.map(UserId::new),
            created_at: model.created_at,
        })
    }
}

impl TryFrom<SaleWithCreatorModel> for SaleSummary {
    type Error = DomainError;

    fn try_from(model: SaleWithCreatorModel) -> Result<Self, Self::Error> {
        let total = parse_decimal(&model.total, "total", model.id)?;

        let recorded_by = match (model.creator_first_name, model.creator_last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        };

        Ok(SaleSummary {
            sale: Sale {
                id: SaleId::new(model.id),
                customer_name: model.customer_name,
                customer_email: model.customer_email,
                total,
                created_by: model.created_by.map(UserId::new),
                created_at: model.created_at,
            },
            recorded_by,
        })
    }
}

impl TryFrom<SaleLineModel> for SaleLine {
    type Error = DomainError;

    fn try_from(model: SaleLineModel) -> Result<Self, Self::Error> {
        let price = parse_decimal(&model.price, "price", model.product_id)?;

        Ok(SaleLine {
            product_id: ProductId::new(model.product_id),
            product_name: model.product_name,
            product_sku: model.product_sku,
            quantity: model.quantity,
            price,
        })
    }
}
