use async_trait::async_trait;
use chrono::NaiveDate;

use super::CompletionEntry;
use crate::shared::{DomainError, HabitId, UserId};
use crate::streak::StreakState;

#[async_trait]
pub trait CompletionRepository: Send + Sync {
    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionEntry>, DomainError>;

    /// Entries of one habit, newest date first.
    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<CompletionEntry>, DomainError>;

    /// Entries of all habits of an owner with `start <= date <= end`.
    async fn list_by_owner_in_range(
        &self,
        owner_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionEntry>, DomainError>;

    /// Store a new entry and the streak it produced in one transaction.
    ///
    /// `streak.version()` must be the revision the caller read (0 when no
    /// streak existed). Returns the stored streak with its new revision.
    ///
    /// Fails with `DuplicateCompletion` when an entry already exists for
    /// (habit, date) and with `ConcurrentModification` when the streak moved
    /// since it was read; in both cases nothing is written.
    async fn save_with_streak(
        &self,
        entry: &CompletionEntry,
        streak: &StreakState,
    ) -> Result<StreakState, DomainError>;
}
