// Application layer - use cases, read models and wiring
// Depends on domain and infrastructure layers

pub mod application;
pub mod presentation;

pub use presentation::{AppState, CommandError};
