//! # pos-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthOutcome, AuthService, InventoryService, SalesService, ServiceContext, ServiceError,
    ServiceResult, UserService,
};
