use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::HabitDto;
use crate::application::utils::load_owned_habit;
use habitrack_domain::events::habit_events::HabitUpdated;
use habitrack_domain::events::EventBus;
use habitrack_domain::habit::{Frequency, HabitRepository};
use habitrack_domain::shared::DomainError;

/// Update habit command handler
pub struct UpdateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    event_bus: Arc<dyn EventBus>,
}

impl UpdateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            habit_repo,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateHabitCommand> for UpdateHabitCommandHandler {
    type Result = UpdateHabitResult;

    async fn handle(&self, cmd: UpdateHabitCommand) -> Result<Self::Result, DomainError> {
        let mut habit =
            load_owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.auth).await?;

        if let Some(name) = cmd.name {
            habit.rename(name)?;
        }

        if let Some(description) = cmd.description {
            habit.update_description(Some(description))?;
        }

        let schedule_changed = cmd.frequency.is_some() || cmd.days.is_some();
        if schedule_changed {
            let frequency: Frequency = match cmd.frequency {
                Some(frequency) => frequency.parse()?,
                None => habit.frequency(),
            };
            let days: Vec<String> = match cmd.days {
                Some(days) => days,
                None => habit
                    .scheduled_days()
                    .iter()
                    .map(|day| day.code().to_string())
                    .collect(),
            };
            habit.reschedule(frequency, &days)?;
        }

        if let Some(reminder_time) = cmd.reminder_time {
            habit.update_reminder_time(&reminder_time)?;
        }

        if let Some(archived) = cmd.archived {
            habit.set_archived(archived);
        }

        self.habit_repo.save(&habit).await?;

        info!(
            "[habit] updated {} (schedule_changed={}, archived={})",
            habit.id(),
            schedule_changed,
            habit.is_archived()
        );

        let event = HabitUpdated {
            habit_id: habit.id().clone(),
            owner_id: habit.owner_id().clone(),
            schedule_changed,
            archived: habit.is_archived(),
            occurred_at: Utc::now(),
        };
        self.event_bus.publish(Box::new(event)).await?;

        Ok(UpdateHabitResult {
            habit: HabitDto::from(&habit),
        })
    }
}
