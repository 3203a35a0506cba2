//! Domain entities - core business objects

mod product;
mod sale;
mod user;

pub use product::Product;
pub use sale::{CustomerIdentity, Sale, SaleItem, SaleLine, SaleSummary};
pub use user::User;
