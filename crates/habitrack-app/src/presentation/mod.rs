pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod state;

pub use commands::{HabitChanges, NewHabit};
pub use error::CommandError;
pub use state::AppState;
