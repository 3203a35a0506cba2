//! Repository implementations

mod error;
mod product;
mod sale;
mod user;

pub use product::SqliteProductRepository;
pub use sale::SqliteSaleRepository;
pub use user::SqliteUserRepository;
