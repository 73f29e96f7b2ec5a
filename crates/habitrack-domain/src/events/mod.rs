use std::any::Any;

/// Base trait for all domain events
pub trait DomainEvent: Send + Sync + Any {
    /// Convert to Any for type-safe downcasting
    fn as_any(&self) -> &(dyn Any + Send + Sync);

    /// Fully qualified type name, used as the subscription key
    fn event_type_name(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($type:ty) => {
        impl $crate::events::DomainEvent for $type {
            fn as_any(&self) -> &(dyn std::any::Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

pub mod event_bus;
pub mod habit_events;

pub use event_bus::{DynamicEventHandler, EventBus, EventHandler, TypedEventHandlerWrapper};
