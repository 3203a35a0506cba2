//! User administration service
//!
//! Admin directory: create accounts with any role, replace profiles, delete
//! accounts, and unlock ones the lockout machine has frozen.

use tracing::{info, instrument};
use validator::Validate;

use pos_common::auth::{hash_password, validate_password_strength};
use pos_core::traits::{NewUser, UserChanges};
use pos_core::value_objects::{Capability, Role, UserId, ViewerContext};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::access::require;
use super::auth::parse_birthday;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User administration service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every account in the directory
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn list_users(&self, viewer: &ViewerContext) -> ServiceResult<Vec<UserResponse>> {
        require(viewer, Capability::ManageUsers)?;

        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Fetch one account by id
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn get_user(
        &self,
        viewer: &ViewerContext,
        id: UserId,
    ) -> ServiceResult<UserResponse> {
        require(viewer, Capability::ManageUsers)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Create an account with an explicit role
    #[instrument(skip(self, viewer, request), fields(viewer_id = %viewer.user_id, email = %request.email))]
    pub async fn create_user(
        &self,
        viewer: &ViewerContext,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require(viewer, Capability::ManageUsers)?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let birthday = parse_birthday(&request.birthday)?;
        let role = parse_role(&request.role)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash = hash_password(&request.password).map_err(ServiceError::from)?;

        let new_user = NewUser {
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            birthday,
            age: request.age,
            address: request.address,
            email: request.email,
            role,
        };

        let user_id = self
            .ctx
            .user_repo()
            .create(&new_user, &password_hash)
            .await?;

        info!(user_id = %user_id, role = %role, "User created");

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Created user not found"))?;

        Ok(UserResponse::from(&user))
    }

    /// Replace an account's profile fields
    ///
    /// The password is untouched; there is no credential change here.
    #[instrument(skip(self, viewer, request), fields(viewer_id = %viewer.user_id))]
    pub async fn update_user(
        &self,
        viewer: &ViewerContext,
        id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require(viewer, Capability::ManageUsers)?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let birthday = parse_birthday(&request.birthday)?;
        let role = parse_role(&request.role)?;

        let changes = UserChanges {
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            birthday,
            age: request.age,
            address: request.address,
            email: request.email,
            role,
        };

        self.ctx.user_repo().update_profile(id, &changes).await?;

        info!(user_id = %id, "User profile updated");

        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Delete an account
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn delete_user(&self, viewer: &ViewerContext, id: UserId) -> ServiceResult<()> {
        require(viewer, Capability::ManageUsers)?;

        let deleted = self.ctx.user_repo().delete(id).await?;
        if !deleted {
            return Err(ServiceError::not_found("User", id.to_string()));
        }

        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Clear the lockout counters so the account can log in again
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.user_id))]
    pub async fn unlock_account(&self, viewer: &ViewerContext, id: UserId) -> ServiceResult<()> {
        require(viewer, Capability::ManageUsers)?;

        self.ctx.user_repo().reset_attempts(id).await?;

        info!(user_id = %id, "Account unlocked");
        Ok(())
    }
}

fn parse_role(raw: &str) -> ServiceResult<Role> {
    raw.parse::<Role>()
        .map_err(|e| ServiceError::validation(e.to_string()))
}
