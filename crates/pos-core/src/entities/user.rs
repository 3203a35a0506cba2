//! User entity - an account holder
//!
//! Never carries the password hash; verification paths fetch the hash
//! separately so display reads cannot leak it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{Role, UserId, ViewerContext};

/// User account with profile fields and lockout counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub age: i32,
    pub address: String,
    pub email: String,
    pub role: Role,
    pub login_attempts: i32,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name: "First Middle Last", middle omitted when absent
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Build the viewer context the session layer passes back in
    pub fn viewer_context(&self) -> ViewerContext {
        ViewerContext::new(self.id, self.role, self.full_name(), self.email.clone())
    }
}
