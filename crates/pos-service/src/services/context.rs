//! Service context - dependency container for services
//!
//! Holds the repositories and the lockout policy shared by all services.

use std::sync::Arc;

use pos_core::traits::{ProductRepository, SaleRepository, UserRepository};
use pos_core::value_objects::LockoutPolicy;

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services. It
/// provides access to:
/// - Database repositories
/// - The configured account lockout policy
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    product_repo: Arc<dyn ProductRepository>,
    sale_repo: Arc<dyn SaleRepository>,
    lockout: LockoutPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        sale_repo: Arc<dyn SaleRepository>,
        lockout: LockoutPolicy,
    ) -> Self {
        Self {
            user_repo,
            product_repo,
            sale_repo,
            lockout,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    /// Get the sale repository
    pub fn sale_repo(&self) -> &dyn SaleRepository {
        self.sale_repo.as_ref()
    }

    /// Get the account lockout policy
    pub fn lockout(&self) -> LockoutPolicy {
        self.lockout
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("lockout", &self.lockout)
            .finish()
    }
}
