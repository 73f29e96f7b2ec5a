use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dtos::{
    CompletionEntryDto, CompletionStatusDto, HabitDetailDto, HabitDto, HabitSummaryDto, StreakDto,
};
use crate::application::utils::load_owned_habit;
use habitrack_domain::completion::{CompletionDomainService, CompletionRepository};
use habitrack_domain::habit::{Habit, HabitRepository};
use habitrack_domain::schedule::parse_calendar_date;
use habitrack_domain::session::AuthContext;
use habitrack_domain::shared::{Clock, DomainError};
use habitrack_domain::streak::{StreakRepository, StreakState};

/// Read side of habits: lists, details and single-day lookups
pub struct HabitQueryService {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    streak_repo: Arc<dyn StreakRepository>,
    clock: Arc<dyn Clock>,
}

impl HabitQueryService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
        streak_repo: Arc<dyn StreakRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            streak_repo,
            clock,
        }
    }

    /// All habits of the caller, newest first, with today's status and streak
    pub async fn list_habits(&self, auth: &AuthContext) -> Result<Vec<HabitSummaryDto>, DomainError> {
        let today = self.clock.today();
        let habits = self.habit_repo.list_by_owner(&auth.user_id).await?;

        let todays_entries = self
            .completion_repo
            .list_by_owner_in_range(&auth.user_id, today, today)
            .await?;

        let streaks: HashMap<String, StreakState> = self
            .streak_repo
            .list_by_owner(&auth.user_id)
            .await?
            .into_iter()
            .map(|s| (s.habit_id().as_str().to_string(), s))
            .collect();

        let summaries = habits
            .iter()
            .map(|habit| {
                let status = CompletionDomainService::classify_status(habit, &todays_entries, today);
                let streak = streaks
                    .get(habit.id().as_str())
                    .cloned()
                    .unwrap_or_else(|| zero_streak(habit));

                HabitSummaryDto {
                    habit: HabitDto::from(habit),
                    status: CompletionStatusDto::from(&status),
                    streak: StreakDto::from(&streak),
                }
            })
            .collect();

        Ok(summaries)
    }

    /// Habit with its entries (newest first) and streak
    pub async fn get_habit_detail(
        &self,
        auth: &AuthContext,
        habit_id: &str,
    ) -> Result<HabitDetailDto, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), habit_id, auth).await?;

        let entries = self.completion_repo.list_by_habit(habit.id()).await?;
        let streak = self
            .streak_repo
            .find_by_habit(habit.id())
            .await?
            .unwrap_or_else(|| zero_streak(&habit));

        Ok(HabitDetailDto {
            habit: HabitDto::from(&habit),
            entries: entries.iter().map(CompletionEntryDto::from).collect(),
            streak: StreakDto::from(&streak),
        })
    }

    /// Entry of a habit on one day, if it was completed
    pub async fn get_entry_for_date(
        &self,
        auth: &AuthContext,
        habit_id: &str,
        date: &str,
    ) -> Result<Option<CompletionEntryDto>, DomainError> {
        let date = parse_calendar_date(date)?;
        let habit = load_owned_habit(self.habit_repo.as_ref(), habit_id, auth).await?;

        let entry = self
            .completion_repo
            .find_by_habit_and_date(habit.id(), date)
            .await?;

        Ok(entry.as_ref().map(CompletionEntryDto::from))
    }
}

fn zero_streak(habit: &Habit) -> StreakState {
    StreakState::empty(habit.id().clone(), habit.owner_id().clone())
}
