//! SQLite implementation of the user repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use pos_core::entities::User;
use pos_core::error::DomainError;
use pos_core::traits::{LockoutStatus, NewUser, RepoResult, UserChanges, UserRepository};
use pos_core::value_objects::UserId;

use crate::models::{LockoutStatusModel, UserModel};
use crate::repositories::error::{map_db_error, map_unique_violation, user_not_found};

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository with the given connection pool
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, middle_name, last_name, birthday, age,
                   address, email, role, login_attempts, is_locked, created_at
            FROM users
            WHERE id = ?
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, middle_name, last_name, birthday, age,
                   address, email, role, login_attempts, is_locked, created_at
            FROM users
            WHERE email = ?
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, middle_name, last_name, birthday, age,
                   address, email, role, login_attempts, is_locked, created_at
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<UserId> {
        let result = sqlx::query(
            r"
            INSERT INTO users (first_name, middle_name, last_name, birthday, age,
                               address, email, password_hash, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&user.first_name)
        .bind(&user.middle_name)
        .bind(&user.last_name)
        .bind(user.birthday)
        .bind(user.age)
        .bind(&user.address)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.role.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateEmail))?;

        Ok(UserId::new(result.last_insert_rowid()))
    }

    #[instrument(skip(self))]
    async fn update_profile(&self, id: UserId, changes: &UserChanges) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET first_name = ?, middle_name = ?, last_name = ?, birthday = ?,
                age = ?, address = ?, email = ?, role = ?
            WHERE id = ?
            ",
        )
        .bind(&changes.first_name)
        .bind(&changes.middle_name)
        .bind(&changes.last_name)
        .bind(changes.birthday)
        .bind(changes.age)
        .bind(&changes.address)
        .bind(&changes.email)
        .bind(changes.role.as_str())
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateEmail))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(hash)
    }

    #[instrument(skip(self))]
    async fn lockout_status(&self, email: &str) -> RepoResult<Option<LockoutStatus>> {
        let model = sqlx::query_as::<_, LockoutStatusModel>(
            "SELECT id, login_attempts, is_locked FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(LockoutStatus::from))
    }

    #[instrument(skip(self))]
    async fn record_failed_attempt(&self, id: UserId, max_attempts: i32) -> RepoResult<i32> {
        // SET reads the old column values; RETURNING reads the new ones.
        let attempts = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE users
            SET login_attempts = login_attempts + 1,
                is_locked = CASE WHEN login_attempts + 1 >= ? THEN 1 ELSE is_locked END
            WHERE id = ?
            RETURNING login_attempts
            ",
        )
        .bind(max_attempts)
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        attempts.ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn reset_attempts(&self, id: UserId) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET login_attempts = 0, is_locked = 0 WHERE id = ?")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn lock(&self, id: UserId) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET is_locked = 1 WHERE id = ?")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}
