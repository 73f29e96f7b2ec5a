use async_trait::async_trait;

use super::Habit;
use crate::shared::{DomainError, HabitId, UserId};

#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Insert or update a habit.
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// Find a habit only if it belongs to `owner_id`.
    async fn find_owned(
        &self,
        id: &HabitId,
        owner_id: &UserId,
    ) -> Result<Option<Habit>, DomainError>;

    /// All habits of an owner, newest first.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Habit>, DomainError>;

    /// Non-archived habits of an owner, newest first.
    async fn list_active_by_owner(&self, owner_id: &UserId) -> Result<Vec<Habit>, DomainError>;

    /// Delete a habit together with its entries and streak.
    async fn delete(&self, id: &HabitId) -> Result<(), DomainError>;
}
