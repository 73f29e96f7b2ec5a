use chrono::NaiveDate;

use super::StreakState;
use crate::shared::{HabitId, UserId};

/// Apply one completion on `date` to the previous streak, with `today` as the
/// reference day.
///
/// Rules, in order:
/// - no previous record: streak starts at 1;
/// - `date == today`: increments, whatever the previous `last_completed_date`
///   was (a second "today" completion also increments; callers rely on the
///   one-entry-per-day constraint to prevent that);
/// - `date == yesterday` and the last completion was yesterday: increments;
/// - anything else (a gap, or a backfilled older date): resets to 1.
///
/// `longest_streak` is raised to `current_streak` when exceeded and never
/// lowered. The returned state keeps the previous `version`, which the store
/// uses as the expected revision.
pub fn record_completion(
    previous: Option<&StreakState>,
    habit_id: &HabitId,
    owner_id: &UserId,
    date: NaiveDate,
    today: NaiveDate,
) -> StreakState {
    let Some(previous) = previous else {
        return StreakState::first_completion(habit_id.clone(), owner_id.clone(), date);
    };

    let yesterday = today.pred_opt();
    let continues = date == today
        || (Some(date) == yesterday && previous.last_completed_date() == yesterday);

    let current = if continues {
        previous.current_streak().saturating_add(1)
    } else {
        1
    };

    previous.with_completion(current, date)
}
