pub mod command_handler;
pub mod habit_commands;
pub mod handlers;
pub mod user_commands;
