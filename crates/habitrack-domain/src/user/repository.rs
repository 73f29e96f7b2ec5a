use async_trait::async_trait;

use super::User;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update a user.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Lookup by normalized (lower-case) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Delete a user and everything they own.
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
