use habitrack_domain::habit::{Habit, HabitRepository};
use habitrack_domain::session::AuthContext;
use habitrack_domain::shared::{DomainError, HabitId};

/// Load a habit of the caller.
///
/// Foreign and missing habits are indistinguishable: both are `HabitNotFound`.
pub async fn load_owned_habit(
    habit_repo: &dyn HabitRepository,
    habit_id: &str,
    auth: &AuthContext,
) -> Result<Habit, DomainError> {
    habit_repo
        .find_owned(&HabitId::from_string(habit_id.trim()), &auth.user_id)
        .await?
        .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))
}
