use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::utils::load_owned_habit;
use habitrack_domain::events::habit_events::HabitDeleted;
use habitrack_domain::events::EventBus;
use habitrack_domain::habit::HabitRepository;
use habitrack_domain::shared::DomainError;

/// Delete habit command handler; entries and streak go with it
pub struct DeleteHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    event_bus: Arc<dyn EventBus>,
}

impl DeleteHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            habit_repo,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteHabitCommand> for DeleteHabitCommandHandler {
    type Result = DeleteHabitResult;

    async fn handle(&self, cmd: DeleteHabitCommand) -> Result<Self::Result, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.auth).await?;

        self.habit_repo.delete(habit.id()).await?;
        info!("[habit] deleted {} ('{}')", habit.id(), habit.name());

        let event = HabitDeleted {
            habit_id: habit.id().clone(),
            owner_id: habit.owner_id().clone(),
            name: habit.name().to_string(),
            occurred_at: Utc::now(),
        };
        self.event_bus.publish(Box::new(event)).await?;

        Ok(DeleteHabitResult { success: true })
    }
}
