//! Account roles and the capability matrix
//!
//! Every authorization decision in the service layer goes through
//! [`Role::allows`] so the role/permission mapping lives in exactly one
//! place instead of ad-hoc checks scattered per operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role, stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    #[default]
    Customer,
}

/// Named permission granted to roles by the capability matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Create, edit, delete, and unlock accounts
    ManageUsers,
    /// Add, edit, and retire products
    ManageInventory,
    /// List the active product catalog
    BrowseCatalog,
    /// Record a sale (customers for themselves, staff for anyone)
    Purchase,
    /// See every sale, not just one's own
    ViewAllSales,
}

impl Role {
    /// Get the role as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Seller => "seller",
            Self::Customer => "customer",
        }
    }

    /// Whether this role holds the given capability
    pub fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::ManageUsers => matches!(self, Self::Admin),
            Capability::ManageInventory | Capability::ViewAllSales => {
                matches!(self, Self::Admin | Self::Seller)
            }
            Capability::BrowseCatalog | Capability::Purchase => true,
        }
    }
}

/// Error when parsing a role from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "seller" => Ok(Self::Seller),
            "customer" => Ok(Self::Customer),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Capability {
    /// Stable name used in permission-denied messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageUsers => "manage_users",
            Self::ManageInventory => "manage_inventory",
            Self::BrowseCatalog => "browse_catalog",
            Self::Purchase => "purchase",
            Self::ViewAllSales => "view_all_sales",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
