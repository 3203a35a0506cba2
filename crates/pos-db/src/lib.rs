//! # pos-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `pos-core`. It handles:
//!
//! - Connection pool management
//! - Embedded schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pos_core::UserRepository;
//! use pos_db::{create_pool, run_migrations, DatabaseConfig, SqliteUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = SqliteUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, SqlitePool};
pub use repositories::{SqliteProductRepository, SqliteSaleRepository, SqliteUserRepository};

/// Embedded migrations, applied at startup and in tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Apply all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
