//! Authentication service
//!
//! Handles self-service registration and the login state machine with
//! account lockout.

use chrono::NaiveDate;
use tracing::{info, instrument, warn};
use validator::Validate;

use pos_common::auth::{hash_password, validate_password_strength, verify_password};
use pos_core::traits::NewUser;
use pos_core::value_objects::{LockState, Role};

use crate::dto::{LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of a login attempt
///
/// `Invalid` covers both unknown emails and wrong passwords so callers
/// cannot probe which accounts exist.
#[derive(Debug)]
pub enum AuthOutcome {
    /// Credentials accepted
    Valid(UserResponse),
    /// Unknown email or wrong password
    Invalid,
    /// The account is locked; the password was not checked
    Locked,
}

impl AuthOutcome {
    /// Message for the login form
    ///
    /// `Locked` is deliberately more specific than `Invalid`, which never
    /// says whether the email exists.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid => Some("Invalid email or password."),
            Self::Locked => Some(
                "Account is locked due to too many failed login attempts. \
                 Please contact an administrator.",
            ),
        }
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new customer account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let birthday = parse_birthday(&request.birthday)?;

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
            role: Role::Customer,
        };

        // The unique index backstops a concurrent registration that slipped
        // past the email check.
        let user_id = self
            .ctx
            .user_repo()
            .create(&new_user, &password_hash)
            .await?;

        info!(user_id = %user_id, "User registered");

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Registered user not found"))?;

        Ok(UserResponse::from(&user))
    }

    /// Run a login attempt through the lockout state machine
    ///
    /// Locked accounts are rejected before any credential lookup or hash
    /// work, so a locked account answers `Locked` even for the correct
    /// password.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn authenticate(&self, request: LoginRequest) -> ServiceResult<AuthOutcome> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let Some(status) = self.ctx.user_repo().lockout_status(&request.email).await? else {
            warn!("Login failed: unknown email");
            return Ok(AuthOutcome::Invalid);
        };

        let policy = self.ctx.lockout();
        if policy.evaluate(status.attempts, status.locked) == LockState::Locked {
            if !status.locked {
                // The stored flag lags the counter when the configured
                // threshold was lowered; persist it now.
                self.ctx.user_repo().lock(status.user_id).await?;
            }
            warn!(user_id = %status.user_id, "Login rejected: account locked");
            return Ok(AuthOutcome::Locked);
        }

        let Some(password_hash) = self
            .ctx
            .user_repo()
            .get_password_hash(status.user_id)
            .await?
        else {
            warn!(user_id = %status.user_id, "Login failed: no password hash");
            return Ok(AuthOutcome::Invalid);
        };

        let is_valid =
            verify_password(&request.password, &password_hash).map_err(ServiceError::from)?;

        if !is_valid {
            let attempts = self
                .ctx
                .user_repo()
                .record_failed_attempt(status.user_id, policy.max_attempts())
                .await?;
            if policy.locks_at(attempts) {
                warn!(user_id = %status.user_id, attempts, "Account locked after failed logins");
            } else {
                warn!(user_id = %status.user_id, attempts, "Login failed: invalid password");
            }
            return Ok(AuthOutcome::Invalid);
        }

        self.ctx.user_repo().reset_attempts(status.user_id).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(status.user_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Authenticated user not found"))?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthOutcome::Valid(UserResponse::from(&user)))
    }
}

/// Parse a `YYYY-MM-DD` date of birth
pub(crate) fn parse_birthday(raw: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ServiceError::validation("Birthday must be formatted as YYYY-MM-DD"))
}
