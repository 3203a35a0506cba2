//! Capability gate shared by the scoped services
//!
//! Every operation that acts for a viewer passes through [`require`] before
//! touching a repository, so the role matrix lives in exactly one place
//! ([`Role::allows`]).
//!
//! [`Role::allows`]: pos_core::value_objects::Role::allows

use pos_core::value_objects::{Capability, ViewerContext};

use super::error::{ServiceError, ServiceResult};

/// Reject the call unless the viewer's role grants the capability
pub fn require(viewer: &ViewerContext, capability: Capability) -> ServiceResult<()> {
    if viewer.role.allows(capability) {
        Ok(())
    } else {
        Err(ServiceError::permission_denied(capability.to_string()))
    }
}
