use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CompletionEntry;
use crate::habit::Habit;
use crate::schedule::{completion_status, format_calendar_date, weekday_of, CompletionStatus};
use crate::shared::DomainError;
use crate::streak::{record_completion, StreakState};

/// Entry plus the streak it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedHabit {
    pub entry: CompletionEntry,
    pub streak: StreakState,
}

/// Completion rules without persistence.
pub struct CompletionDomainService;

impl CompletionDomainService {
    /// Reject dates outside the habit's recurrence rule.
    pub fn ensure_scheduled(habit: &Habit, date: NaiveDate) -> Result<(), DomainError> {
        if habit.is_scheduled(date) {
            Ok(())
        } else {
            Err(DomainError::NotScheduledForDay(
                weekday_of(date).code().to_string(),
            ))
        }
    }

    /// Validate a completion and compute its entry and next streak.
    ///
    /// `existing` is the entry already stored for (habit, date), if any.
    pub fn prepare_completion(
        habit: &Habit,
        previous: Option<&StreakState>,
        existing: Option<&CompletionEntry>,
        date: NaiveDate,
        today: NaiveDate,
        count: Option<u32>,
        note: Option<String>,
    ) -> Result<CompletedHabit, DomainError> {
        Self::ensure_scheduled(habit, date)?;

        if existing.is_some() {
            return Err(DomainError::DuplicateCompletion(format_calendar_date(date)));
        }

        let entry = CompletionEntry::new(
            habit.id().clone(),
            habit.owner_id().clone(),
            date,
            count,
            note,
        )?;
        let streak = record_completion(previous, habit.id(), habit.owner_id(), date, today);

        Ok(CompletedHabit { entry, streak })
    }

    /// Status of a habit for `today`, given its known entries.
    pub fn classify_status(
        habit: &Habit,
        entries: &[CompletionEntry],
        today: NaiveDate,
    ) -> CompletionStatus {
        let completed_today = entries
            .iter()
            .any(|entry| entry.habit_id() == habit.id() && entry.date() == today);

        completion_status(habit.scheduled_days(), completed_today, today)
    }
}
