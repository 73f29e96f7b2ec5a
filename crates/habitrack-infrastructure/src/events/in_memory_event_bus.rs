use async_trait::async_trait;
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use habitrack_domain::events::{DomainEvent, DynamicEventHandler, EventBus};
use habitrack_domain::shared::DomainError;

type HandlerMap = HashMap<&'static str, Vec<Arc<dyn DynamicEventHandler>>>;

/// In-memory event bus
///
/// Dispatches in-process, one handler after the other. A failing handler is
/// logged and does not stop the rest.
pub struct InMemoryEventBus {
    handlers: Arc<RwLock<HandlerMap>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe a handler to a specific event type
    pub async fn subscribe<E: DomainEvent + 'static>(&self, handler: Arc<dyn DynamicEventHandler>) {
        let event_type_name = std::any::type_name::<E>();
        let mut handlers = self.handlers.write().await;

        handlers.entry(event_type_name).or_default().push(handler);

        info!("[events] subscribed handler for {}", event_type_name);
    }

    pub async fn handler_count<E: DomainEvent + 'static>(&self) -> usize {
        let handlers = self.handlers.read().await;
        handlers
            .get(std::any::type_name::<E>())
            .map_or(0, |h| h.len())
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
        let event_type_name = event.event_type_name();
        let handlers = self.handlers.read().await;

        let Some(event_handlers) = handlers.get(event_type_name) else {
            log::debug!("[events] no handlers registered for {}", event_type_name);
            return Ok(());
        };

        for handler in event_handlers {
            if let Err(e) = handler.handle_dynamic(event.as_any()).await {
                error!("[events] handler failed to process {}: {}", event_type_name, e);
            }
        }

        Ok(())
    }
}
