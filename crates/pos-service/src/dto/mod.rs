//! Data transfer objects for boundary requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateProductRequest, CreateUserRequest, CustomerIdentityRequest, LoginRequest, PurchaseLine,
    PurchaseRequest, RegisterRequest, UpdateProductRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ProductResponse, SaleDetailResponse, SaleLineResponse, SaleResponse, SaleSummaryResponse,
    UserResponse,
};
