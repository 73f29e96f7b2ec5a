use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::{CompletionEntryDto, StreakDto};
use crate::application::utils::load_owned_habit;
use habitrack_domain::completion::{CompletionDomainService, CompletionRepository};
use habitrack_domain::events::habit_events::HabitCompleted;
use habitrack_domain::events::EventBus;
use habitrack_domain::habit::HabitRepository;
use habitrack_domain::schedule::parse_calendar_date;
use habitrack_domain::shared::{Clock, DomainError};
use habitrack_domain::streak::StreakRepository;

/// Records a completion and advances the habit's streak.
///
/// The entry and the streak are stored in one transaction guarded by the
/// streak revision. When another writer moved the streak in between, the
/// whole step is recomputed from fresh state, up to `max_attempts` times.
pub struct CompleteHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    streak_repo: Arc<dyn StreakRepository>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
    max_attempts: u32,
}

impl CompleteHabitCommandHandler {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
        streak_repo: Arc<dyn StreakRepository>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            streak_repo,
            event_bus,
            clock,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

#[async_trait]
impl CommandHandler<CompleteHabitCommand> for CompleteHabitCommandHandler {
    type Result = CompleteHabitResult;

    async fn handle(&self, cmd: CompleteHabitCommand) -> Result<Self::Result, DomainError> {
        let date = parse_calendar_date(&cmd.date)?;
        let habit = load_owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.auth).await?;
        let today = self.clock.today();

        let mut attempt = 0;
        let (entry, streak) = loop {
            attempt += 1;

            let existing = self
                .completion_repo
                .find_by_habit_and_date(habit.id(), date)
                .await?;
            let previous = self.streak_repo.find_by_habit(habit.id()).await?;

            let completed = CompletionDomainService::prepare_completion(
                &habit,
                previous.as_ref(),
                existing.as_ref(),
                date,
                today,
                cmd.count,
                cmd.note.clone(),
            )?;

            let saved = self
                .completion_repo
                .save_with_streak(&completed.entry, &completed.streak)
                .await;

            match saved {
                Ok(stored) => break (completed.entry, stored),
                Err(DomainError::ConcurrentModification(reason)) if attempt < self.max_attempts => {
                    warn!(
                        "[completion] streak of habit {} changed concurrently (attempt {}/{}): {}",
                        habit.id(),
                        attempt,
                        self.max_attempts,
                        reason
                    );
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            "[completion] habit {} completed for {} (current={}, longest={})",
            habit.id(),
            cmd.date.trim(),
            streak.current_streak(),
            streak.longest_streak()
        );

        let event = HabitCompleted {
            habit_id: habit.id().clone(),
            owner_id: habit.owner_id().clone(),
            date,
            current_streak: streak.current_streak(),
            longest_streak: streak.longest_streak(),
            occurred_at: Utc::now(),
        };
        self.event_bus.publish(Box::new(event)).await?;

        Ok(CompleteHabitResult {
            entry: CompletionEntryDto::from(&entry),
            streak: StreakDto::from(&streak),
        })
    }
}
