//! Value objects - immutable domain values

mod ids;
mod lockout;
mod role;
mod viewer;

pub use ids::{ProductId, SaleId, UserId};
pub use lockout::{LockState, LockoutPolicy};
pub use role::{Capability, Role, RoleParseError};
pub use viewer::ViewerContext;
