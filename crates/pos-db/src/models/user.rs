//! User database models
//!
//! `UserModel` deliberately has no `password_hash` column: display reads
//! never select the hash, which is fetched on its own by the verification
//! path.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for users table reads
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub age: i32,
    pub address: String,
    pub email: String,
    pub role: String,
    pub login_attempts: i32,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

/// Lockout counters only, read before any credential work
#[derive(Debug, Clone, Copy, FromRow)]
pub struct LockoutStatusModel {
    pub id: i64,
    pub login_attempts: i32,
    pub is_locked: bool,
}
