//! Product model → entity mapper

use pos_core::entities::Product;
use pos_core::error::DomainError;
use pos_core::value_objects::ProductId;

use crate::models::ProductModel;

use super::parse_decimal;

impl TryFrom<ProductModel> for Product {
    type Error = DomainError;

    fn try_from(model: ProductModel) -> Result<Self, Self::Error> {
        let price = parse_decimal(&model.price, "price", model.id)?;

        Ok(Product {
            id: ProductId::new(model.id),
            name: model.name,
            sku: model.sku,
            quantity: model.quantity,
            price,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
        })
    }
}
