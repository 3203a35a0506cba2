//! Account lockout policy
//!
//! Pure evaluation of stored attempt counters. The account is `Locked` as
//! soon as the counter reaches the configured maximum, whether or not the
//! persistent lock flag has caught up yet; the flag alone also locks, so an
//! administratively locked account stays locked at any counter value.

/// Lockout state of one account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// Login attempts may proceed to password verification
    Active,
    /// All attempts are rejected before any credential work
    Locked,
}

/// Configured lockout thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    max_attempts: i32,
}

impl LockoutPolicy {
    /// Failed attempts allowed before the account locks
    pub const DEFAULT_MAX_ATTEMPTS: i32 = 3;

    /// Create a policy; the threshold is floored at 1
    pub fn new(max_attempts: i32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// The configured threshold
    #[inline]
    pub fn max_attempts(&self) -> i32 {
        self.max_attempts
    }

    /// Evaluate the stored counter and flag into a state
    pub fn evaluate(&self, attempts: i32, locked_flag: bool) -> LockState {
        if locked_flag || attempts >= self.max_attempts {
            LockState::Locked
        } else {
            LockState::Active
        }
    }

    /// Whether a counter at this value should carry the lock flag
    #[inline]
    pub fn locks_at(&self, attempts: i32) -> bool {
        attempts >= self.max_attempts
    }
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}
