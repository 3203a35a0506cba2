//! Database models - row shapes as stored

mod product;
mod sale;
mod user;

pub use product::ProductModel;
pub use sale::{SaleLineModel, SaleModel, SaleWithCreatorModel};
pub use user::{LockoutStatusModel, UserModel};
