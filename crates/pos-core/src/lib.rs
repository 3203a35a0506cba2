//! # pos-core
//!
//! Domain layer containing entities, value objects, domain errors, and
//! repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{CustomerIdentity, Product, Sale, SaleItem, SaleLine, SaleSummary, User};
pub use error::DomainError;
pub use traits::{
    LockoutStatus, NewProduct, NewSale, NewUser, ProductChanges, ProductRepository, RepoResult,
    SaleRepository, UserChanges, UserRepository,
};
pub use value_objects::{
    Capability, LockState, LockoutPolicy, ProductId, Role, RoleParseError, SaleId, UserId,
    ViewerContext,
};
