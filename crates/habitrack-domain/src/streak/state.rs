use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::{HabitId, UserId};

/// Per-habit streak record.
///
/// `version` is the persisted revision used for optimistic concurrency;
/// 0 means the record has never been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    habit_id: HabitId,
    owner_id: UserId,
    current_streak: u32,
    longest_streak: u32,
    last_completed_date: Option<NaiveDate>,
    version: i64,
}

impl StreakState {
    /// Zero streak shown for habits that were never completed.
    pub fn empty(habit_id: HabitId, owner_id: UserId) -> Self {
        Self {
            habit_id,
            owner_id,
            current_streak: 0,
            longest_streak: 0,
            last_completed_date: None,
            version: 0,
        }
    }

    pub fn restore(
        habit_id: HabitId,
        owner_id: UserId,
        current_streak: u32,
        longest_streak: u32,
        last_completed_date: Option<NaiveDate>,
        version: i64,
    ) -> Self {
        Self {
            habit_id,
            owner_id,
            current_streak,
            longest_streak: longest_streak.max(current_streak),
            last_completed_date,
            version,
        }
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn last_completed_date(&self) -> Option<NaiveDate> {
        self.last_completed_date
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn is_persisted(&self) -> bool {
        self.version > 0
    }

    /// Copy stamped with the revision the store assigned on write.
    pub fn with_version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub(super) fn first_completion(habit_id: HabitId, owner_id: UserId, date: NaiveDate) -> Self {
        Self {
            habit_id,
            owner_id,
            current_streak: 1,
            longest_streak: 1,
            last_completed_date: Some(date),
            version: 0,
        }
    }

    pub(super) fn with_completion(&self, current_streak: u32, date: NaiveDate) -> Self {
        Self {
            habit_id: self.habit_id.clone(),
            owner_id: self.owner_id.clone(),
            current_streak,
            longest_streak: self.longest_streak.max(current_streak),
            last_completed_date: Some(date),
            version: self.version,
        }
    }
}
