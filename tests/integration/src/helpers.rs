//! Test helpers for integration tests
//!
//! Provides an application fixture wired to an in-memory database, plus
//! account seeding shortcuts.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use pos_common::auth::hash_password;
use pos_common::telemetry::{try_init_tracing, TracingConfig};
use pos_core::traits::NewUser;
use pos_core::value_objects::{LockoutPolicy, Role, UserId, ViewerContext};
use pos_db::pool::{create_pool, DatabaseConfig};
use pos_db::repositories::{SqliteProductRepository, SqliteSaleRepository, SqliteUserRepository};
use pos_db::{run_migrations, SqlitePool};
use pos_service::dto::UserResponse;
use pos_service::services::{
    AuthService, InventoryService, SalesService, ServiceContext, UserService,
};

use crate::fixtures;

/// Application fixture: a service context over a fresh in-memory database
pub struct TestApp {
    pool: SqlitePool,
    ctx: ServiceContext,
}

impl TestApp {
    /// Start with the default lockout policy
    pub async fn start() -> Result<Self> {
        Self::start_with_policy(LockoutPolicy::default()).await
    }

    /// Start with a custom lockout policy
    pub async fn start_with_policy(policy: LockoutPolicy) -> Result<Self> {
        // First caller installs the subscriber, the rest keep it
        let _ = try_init_tracing(&TracingConfig::test());

        let pool = create_pool(&DatabaseConfig::in_memory()).await?;
        run_migrations(&pool).await?;
        let ctx = build_context(&pool, policy);
        Ok(Self { pool, ctx })
    }

    /// A second context over the same database with a different policy, as
    /// after a configuration change and restart
    #[must_use]
    pub fn with_policy(&self, policy: LockoutPolicy) -> Self {
        Self {
            pool: self.pool.clone(),
            ctx: build_context(&self.pool, policy),
        }
    }

    /// The shared service context
    pub fn ctx(&self) -> &ServiceContext {
        &self.ctx
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.ctx)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.ctx)
    }

    pub fn inventory(&self) -> InventoryService<'_> {
        InventoryService::new(&self.ctx)
    }

    pub fn sales(&self) -> SalesService<'_> {
        SalesService::new(&self.ctx)
    }

    /// Create an account directly in the store, bypassing registration
    pub async fn seed_user(
        &self,
        email: &str,
        role: Role,
        password: &str,
    ) -> Result<ViewerContext> {
        let hash = hash_password(password)?;
        let new_user = NewUser {
            first_name: "Test".to_string(),
            middle_name: None,
            last_name: fixtures::last_name_for(role),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            age: 36,
            address: "1 Test Lane".to_string(),
            email: email.to_string(),
            role,
        };
        let id = self.ctx.user_repo().create(&new_user, &hash).await?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .expect("seeded user exists");
        Ok(user.viewer_context())
    }
}

fn build_context(pool: &SqlitePool, policy: LockoutPolicy) -> ServiceContext {
    ServiceContext::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteProductRepository::new(pool.clone())),
        Arc::new(SqliteSaleRepository::new(pool.clone())),
        policy,
    )
}

/// Builds a viewer context from a user returned by the services.
///
/// # Panics
///
/// Panics if the response id is not numeric.
#[must_use]
pub fn viewer_of(user: &UserResponse) -> ViewerContext {
    ViewerContext::new(
        UserId::new(user.id.parse().expect("numeric user id")),
        user.role,
        user.full_name.clone(),
        user.email.clone(),
    )
}
