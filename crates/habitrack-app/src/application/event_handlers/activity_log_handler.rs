use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use habitrack_domain::events::event_bus::EventHandler;
use habitrack_domain::events::habit_events::*;
use habitrack_domain::shared::DomainError;

/// Writes one structured `activity` log line per lifecycle event.
///
/// Keeps command handlers free of audit logging.
#[derive(Clone, Default)]
pub struct ActivityLogEventHandler {
    recorded: Arc<AtomicU64>,
}

impl ActivityLogEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen since startup
    pub fn recorded(&self) -> u64 {
        self.recorded.load(Ordering::Relaxed)
    }

    fn bump(&self) {
        self.recorded.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait]
impl EventHandler<UserRegistered> for ActivityLogEventHandler {
    async fn handle(&self, event: &UserRegistered) -> Result<(), DomainError> {
        info!(target: "activity", user_id = %event.user_id, "user registered");
        self.bump();
        Ok(())
    }
}

#[async_trait]
impl EventHandler<HabitCreated> for ActivityLogEventHandler {
    async fn handle(&self, event: &HabitCreated) -> Result<(), DomainError> {
        info!(
            target: "activity",
            habit_id = %event.habit_id,
            owner_id = %event.owner_id,
            frequency = %event.frequency,
            "habit created: {}",
            event.name
        );
        self.bump();
        Ok(())
    }
}

#[async_trait]
impl EventHandler<HabitUpdated> for ActivityLogEventHandler {
    async fn handle(&self, event: &HabitUpdated) -> Result<(), DomainError> {
        info!(
            target: "activity",
            habit_id = %event.habit_id,
            schedule_changed = event.schedule_changed,
            archived = event.archived,
            "habit updated"
        );
        self.bump();
        Ok(())
    }
}

#[async_trait]
impl EventHandler<HabitDeleted> for ActivityLogEventHandler {
    async fn handle(&self, event: &HabitDeleted) -> Result<(), DomainError> {
        info!(
            target: "activity",
            habit_id = %event.habit_id,
            owner_id = %event.owner_id,
            "habit deleted: {}",
            event.name
        );
        self.bump();
        Ok(())
    }
}

#[async_trait]
impl EventHandler<HabitCompleted> for ActivityLogEventHandler {
    async fn handle(&self, event: &HabitCompleted) -> Result<(), DomainError> {
        info!(
            target: "activity",
            habit_id = %event.habit_id,
            date = %event.date,
            current_streak = event.current_streak,
            longest_streak = event.longest_streak,
            "habit completed"
        );
        self.bump();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use habitrack_domain::events::{EventBus, TypedEventHandlerWrapper};
    use habitrack_domain::shared::{HabitId, UserId};
    use habitrack_infrastructure::events::InMemoryEventBus;

    #[tokio::test]
    async fn test_activity_handler_receives_published_events() {
        let bus = InMemoryEventBus::new();
        let handler = ActivityLogEventHandler::new();

        bus.subscribe::<HabitCompleted>(Arc::new(TypedEventHandlerWrapper::<HabitCompleted, _>::new(
            handler.clone(),
        )))
        .await;

        let event = HabitCompleted {
            habit_id: HabitId::new(),
            owner_id: UserId::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            current_streak: 1,
            longest_streak: 1,
            occurred_at: Utc::now(),
        };
        bus.publish(Box::new(event)).await.unwrap();

        // Not subscribed for deletions
        let deleted = HabitDeleted {
            habit_id: HabitId::new(),
            owner_id: UserId::new(),
            name: "Read".to_string(),
            occurred_at: Utc::now(),
        };
        bus.publish(Box::new(deleted)).await.unwrap();

        assert_eq!(handler.recorded(), 1);
    }
}
