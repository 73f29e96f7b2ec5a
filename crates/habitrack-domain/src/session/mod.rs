mod repository;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

pub use repository::SessionRepository;

/// Login session of a user.
///
/// Kept apart from the `User` aggregate since it changes on every login
/// while credentials rarely do. A user holds at most one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
    token: String,
    expires_at: DateTime<Utc>,
    last_login_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        user_id: UserId,
        token: String,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, DomainError> {
        if token.trim().is_empty() {
            return Err(DomainError::Validation(
                "Session token cannot be empty".to_string(),
            ));
        }
        if ttl <= Duration::zero() {
            return Err(DomainError::Validation(
                "Session lifetime must be positive".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            token,
            expires_at: issued_at + ttl,
            last_login_at: issued_at,
        })
    }

    pub fn restore(
        user_id: UserId,
        token: String,
        expires_at: DateTime<Utc>,
        last_login_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            token,
            expires_at,
            last_login_at,
        }
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Mark session as expired
    pub fn expire(&mut self, now: DateTime<Utc>) {
        self.expires_at = now - Duration::seconds(1);
    }

    // Getters
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn last_login_at(&self) -> DateTime<Utc> {
        self.last_login_at
    }
}

/// Identity resolved from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: UserId,
    pub email: String,
}
