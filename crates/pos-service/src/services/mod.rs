//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod auth;
pub mod context;
pub mod error;
pub mod inventory;
pub mod sales;
pub mod user;

// Re-export all services for convenience
pub use auth::{AuthOutcome, AuthService};
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use inventory::InventoryService;
pub use sales::SalesService;
pub use user::UserService;
