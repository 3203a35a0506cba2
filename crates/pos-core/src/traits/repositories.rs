//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{Product, Sale, SaleItem, SaleLine, SaleSummary, User};
use crate::error::DomainError;
use crate::value_objects::{ProductId, Role, SaleId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Fields for a user row about to be created; the id comes from the store
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub age: i32,
    pub address: String,
    pub email: String,
    pub role: Role,
}

/// Full profile replacement for an existing user
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub age: i32,
    pub address: String,
    pub email: String,
    pub role: Role,
}

/// Lockout counters for one account, fetched before any credential work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutStatus {
    pub user_id: UserId,
    pub attempts: i32,
    pub locked: bool,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all users for the admin directory
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user, returning the assigned id
    ///
    /// Fails with [`DomainError::DuplicateEmail`] when the email is taken.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<UserId>;

    /// Replace the profile of an existing user
    ///
    /// Fails with [`DomainError::UserNotFound`] when the id is absent and
    /// [`DomainError::DuplicateEmail`] when the new email belongs to a
    /// different user.
    async fn update_profile(&self, id: UserId, changes: &UserChanges) -> RepoResult<()>;

    /// Hard delete; returns whether a row was removed
    async fn delete(&self, id: UserId) -> RepoResult<bool>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Fetch lockout counters by email without touching the hash
    async fn lockout_status(&self, email: &str) -> RepoResult<Option<LockoutStatus>>;

    /// Atomically increment the attempt counter, raising the lock flag when
    /// the new count reaches `max_attempts`; returns the new count
    async fn record_failed_attempt(&self, id: UserId, max_attempts: i32) -> RepoResult<i32>;

    /// Reset attempts to zero and clear the lock flag in one statement
    async fn reset_attempts(&self, id: UserId) -> RepoResult<()>;

    /// Raise the lock flag
    async fn lock(&self, id: UserId) -> RepoResult<()>;
}

// ============================================================================
// Product Repository
// ============================================================================

/// Fields for a product row about to be created
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: Decimal,
}

/// Full replacement for an existing active product
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub price: Decimal,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, returning the assigned id
    ///
    /// Fails with [`DomainError::DuplicateSku`] when an active product
    /// already carries the sku.
    async fn create(&self, product: &NewProduct) -> RepoResult<ProductId>;

    /// Find an active (non-deleted) product by ID
    async fn find_active(&self, id: ProductId) -> RepoResult<Option<Product>>;

    /// List active products in insertion order
    async fn list_active(&self) -> RepoResult<Vec<Product>>;

    /// Replace an active product's fields
    ///
    /// Fails with [`DomainError::ProductNotFound`] when the id is missing or
    /// soft-deleted, and [`DomainError::DuplicateSku`] when the sku collides
    /// with a different active product.
    async fn update(&self, id: ProductId, changes: &ProductChanges) -> RepoResult<()>;

    /// Set the soft-delete flag; idempotent, missing ids are a no-op
    async fn soft_delete(&self, id: ProductId) -> RepoResult<()>;
}

// ============================================================================
// Sale Repository
// ============================================================================

/// A complete sale ready to be recorded in one transaction
#[derive(Debug, Clone)]
pub struct NewSale {
    pub customer_name: String,
    pub customer_email: String,
    pub total: Decimal,
    pub created_by: UserId,
    pub items: Vec<SaleItem>,
}

#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Record the sale, its line items, and the stock decrements atomically
    ///
    /// All-or-nothing: a missing product or depleted stock rolls everything
    /// back with [`DomainError::ProductNotFound`] or
    /// [`DomainError::InsufficientStock`].
    async fn record(&self, sale: &NewSale) -> RepoResult<SaleId>;

    /// Find a sale header by ID
    async fn find_by_id(&self, id: SaleId) -> RepoResult<Option<Sale>>;

    /// All sales, newest first, annotated with the recording user's name
    async fn list_all(&self) -> RepoResult<Vec<SaleSummary>>;

    /// Sales belonging to one customer email, newest first
    async fn list_for_customer(&self, email: &str) -> RepoResult<Vec<Sale>>;

    /// Line items of a sale joined with current product name/sku
    async fn line_items(&self, sale_id: SaleId) -> RepoResult<Vec<SaleLine>>;
}
