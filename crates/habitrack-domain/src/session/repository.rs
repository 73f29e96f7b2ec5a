use async_trait::async_trait;

use super::Session;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save the session of a user, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError>;

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Session>, DomainError>;

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError>;
}
