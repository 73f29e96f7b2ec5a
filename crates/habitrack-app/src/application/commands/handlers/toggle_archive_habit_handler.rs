use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::utils::load_owned_habit;
use habitrack_domain::events::habit_events::HabitUpdated;
use habitrack_domain::events::EventBus;
use habitrack_domain::habit::HabitRepository;
use habitrack_domain::shared::DomainError;

pub struct ToggleArchiveHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    event_bus: Arc<dyn EventBus>,
}

impl ToggleArchiveHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            habit_repo,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<ToggleArchiveHabitCommand> for ToggleArchiveHabitCommandHandler {
    type Result = ToggleArchiveHabitResult;

    async fn handle(&self, cmd: ToggleArchiveHabitCommand) -> Result<Self::Result, DomainError> {
        let mut habit =
            load_owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.auth).await?;

        let archived = !habit.is_archived();
        habit.set_archived(archived);
        self.habit_repo.save(&habit).await?;

        info!(
            "[habit] {} {}",
            habit.id(),
            if archived { "archived" } else { "unarchived" }
        );

        let event = HabitUpdated {
            habit_id: habit.id().clone(),
            owner_id: habit.owner_id().clone(),
            schedule_changed: false,
            archived,
            occurred_at: Utc::now(),
        };
        self.event_bus.publish(Box::new(event)).await?;

        Ok(ToggleArchiveHabitResult { archived })
    }
}
