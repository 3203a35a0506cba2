//! Viewer context - explicit caller identity
//!
//! The session layer resolves its cookie into one of these and hands it to
//! every scoped operation; the core never reads ambient session state.

use crate::value_objects::{Role, UserId};

/// Identity and role of the party invoking an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerContext {
    pub user_id: UserId,
    pub role: Role,
    pub display_name: String,
    pub email: String,
}

impl ViewerContext {
    pub fn new(
        user_id: UserId,
        role: Role,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            role,
            display_name: display_name.into(),
            email: email.into(),
        }
    }
}
