// Domain layer - pure business logic
// No dependencies on infrastructure or application layers

pub mod completion;
pub mod events;
pub mod habit;
pub mod schedule;
pub mod session;
pub mod shared;
pub mod streak;
pub mod user;

// Re-exports for convenience
pub use events::DomainEvent;
pub use shared::{DomainError, EntryId, HabitId, UserId};
