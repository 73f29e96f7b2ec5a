use crate::application::commands::command_handler::Command;
use crate::application::dtos::{CompletionEntryDto, HabitDto, StreakDto};
use habitrack_domain::session::AuthContext;

/// Create habit command
#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub auth: AuthContext,
    pub name: String,
    pub description: Option<String>,
    pub frequency: String,
    /// Weekday names; ignored for daily habits
    pub days: Vec<String>,
    pub reminder_time: String,
}

impl Command for CreateHabitCommand {}

#[derive(Debug, Clone)]
pub struct CreateHabitResult {
    pub habit: HabitDto,
}

/// Partial update; `None` keeps the current value.
///
/// `description: Some("")` clears the description.
#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
    pub auth: AuthContext,
    pub habit_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub days: Option<Vec<String>>,
    pub reminder_time: Option<String>,
    pub archived: Option<bool>,
}

impl Command for UpdateHabitCommand {}

#[derive(Debug, Clone)]
pub struct UpdateHabitResult {
    pub habit: HabitDto,
}

/// Flip the archived flag
#[derive(Debug, Clone)]
pub struct ToggleArchiveHabitCommand {
    pub auth: AuthContext,
    pub habit_id: String,
}

impl Command for ToggleArchiveHabitCommand {}

#[derive(Debug, Clone)]
pub struct ToggleArchiveHabitResult {
    pub archived: bool,
}

#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub auth: AuthContext,
    pub habit_id: String,
}

impl Command for DeleteHabitCommand {}

#[derive(Debug, Clone)]
pub struct DeleteHabitResult {
    pub success: bool,
}

/// Mark a habit done on a calendar day
#[derive(Debug, Clone)]
pub struct CompleteHabitCommand {
    pub auth: AuthContext,
    pub habit_id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub note: Option<String>,
    pub count: Option<u32>,
}

impl Command for CompleteHabitCommand {}

#[derive(Debug, Clone)]
pub struct CompleteHabitResult {
    pub entry: CompletionEntryDto,
    pub streak: StreakDto,
}
