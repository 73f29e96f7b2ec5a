use async_trait::async_trait;

use super::StreakState;
use crate::shared::{DomainError, HabitId, UserId};

/// Read side of streak records.
///
/// Writes go through `CompletionRepository::save_with_streak` so that the
/// entry and the streak change together.
#[async_trait]
pub trait StreakRepository: Send + Sync {
    async fn find_by_habit(&self, habit_id: &HabitId) -> Result<Option<StreakState>, DomainError>;

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<StreakState>, DomainError>;
}
