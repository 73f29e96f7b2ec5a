mod auth_handlers;
mod complete_habit_handler;
mod create_habit_handler;
mod delete_habit_handler;
mod profile_handlers;
mod toggle_archive_habit_handler;
mod update_habit_handler;


pub use auth_handlers::{LoginCommandHandler, LogoutCommandHandler, RegisterUserCommandHandler};
pub use complete_habit_handler::CompleteHabitCommandHandler;
pub use create_habit_handler::CreateHabitCommandHandler;
pub use delete_habit_handler::DeleteHabitCommandHandler;
pub use profile_handlers::{
    ChangePasswordCommandHandler, DeleteAccountCommandHandler, UpdateProfileCommandHandler,
};
pub use toggle_archive_habit_handler::ToggleArchiveHabitCommandHandler;
pub use update_habit_handler::UpdateHabitCommandHandler;
