//! Session-authenticated entry points.
//!
//! Every operation except register and login takes the caller's session
//! token, resolves it to an `AuthContext` and maps failures to `CommandError`.

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::commands::user_commands::*;
use crate::application::dtos::{
    AuthSessionDto, CompletionEntryDto, HabitDetailDto, HabitDto, HabitSummaryDto,
    StreakDto, UserDto, WeeklyAnalyticsDto,
};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use habitrack_domain::session::AuthContext;

/// Fields of a new habit
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub frequency: String,
    pub days: Vec<String>,
    pub reminder_time: String,
}

/// Partial habit update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct HabitChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub days: Option<Vec<String>>,
    pub reminder_time: Option<String>,
    pub archived: Option<bool>,
}

impl AppState {
    async fn authenticate(&self, token: &str) -> Result<AuthContext, CommandError> {
        Ok(self.services.auth.authenticate(token).await?)
    }

    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<AuthSessionDto, CommandError> {
        let command = RegisterUserCommand {
            name,
            email,
            password,
        };
        let result = self.command_handlers.register_user.handle(command).await?;
        Ok(result.session)
    }

    pub async fn login(&self, email: String, password: String) -> Result<AuthSessionDto, CommandError> {
        let result = self
            .command_handlers
            .login
            .handle(LoginCommand { email, password })
            .await?;
        Ok(result.session)
    }

    pub async fn logout(&self, token: &str) -> Result<bool, CommandError> {
        let auth = self.authenticate(token).await?;
        let result = self.command_handlers.logout.handle(LogoutCommand { auth }).await?;
        Ok(result.success)
    }

    pub async fn me(&self, token: &str) -> Result<UserDto, CommandError> {
        let auth = self.authenticate(token).await?;
        Ok(self.queries.user.get_current_user(&auth).await?)
    }

    pub async fn change_password(
        &self,
        token: &str,
        current_password: String,
        new_password: String,
    ) -> Result<bool, CommandError> {
        let auth = self.authenticate(token).await?;
        let command = ChangePasswordCommand {
            auth,
            current_password,
            new_password,
        };
        Ok(self.command_handlers.change_password.handle(command).await?.success)
    }

    pub async fn update_profile(
        &self,
        token: &str,
        name: Option<String>,
        email: Option<String>,
        settings: Option<SettingsPatch>,
    ) -> Result<UserDto, CommandError> {
        let auth = self.authenticate(token).await?;
        let command = UpdateProfileCommand {
            auth,
            name,
            email,
            settings,
        };
        Ok(self.command_handlers.update_profile.handle(command).await?.user)
    }

    pub async fn delete_account(&self, token: &str) -> Result<bool, CommandError> {
        let auth = self.authenticate(token).await?;
        let result = self
            .command_handlers
            .delete_account
            .handle(DeleteAccountCommand { auth })
            .await?;
        Ok(result.success)
    }

    pub async fn create_habit(&self, token: &str, habit: NewHabit) -> Result<HabitDto, CommandError> {
        let auth = self.authenticate(token).await?;
        let command = CreateHabitCommand {
            auth,
            name: habit.name,
            description: habit.description,
            frequency: habit.frequency,
            days: habit.days,
            reminder_time: habit.reminder_time,
        };
        Ok(self.command_handlers.create_habit.handle(command).await?.habit)
    }

    pub async fn update_habit(
        &self,
        token: &str,
        habit_id: &str,
        changes: HabitChanges,
    ) -> Result<HabitDto, CommandError> {
        let auth = self.authenticate(token).await?;
        let command = UpdateHabitCommand {
            auth,
            habit_id: habit_id.to_string(),
            name: changes.name,
            description: changes.description,
            frequency: changes.frequency,
            days: changes.days,
            reminder_time: changes.reminder_time,
            archived: changes.archived,
        };
        Ok(self.command_handlers.update_habit.handle(command).await?.habit)
    }

    /// Returns the new archived flag
    pub async fn toggle_archive_habit(&self, token: &str, habit_id: &str) -> Result<bool, CommandError> {
        let auth = self.authenticate(token).await?;
        let command = ToggleArchiveHabitCommand {
            auth,
            habit_id: habit_id.to_string(),
        };
        Ok(self.command_handlers.toggle_archive_habit.handle(command).await?.archived)
    }

    pub async fn delete_habit(&self, token: &str, habit_id: &str) -> Result<bool, CommandError> {
        let auth = self.authenticate(token).await?;
        let command = DeleteHabitCommand {
            auth,
            habit_id: habit_id.to_string(),
        };
        Ok(self.command_handlers.delete_habit.handle(command).await?.success)
    }

    pub async fn complete_habit(
        &self,
        token: &str,
        habit_id: &str,
        date: &str,
        note: Option<String>,
        count: Option<u32>,
    ) -> Result<(CompletionEntryDto, StreakDto), CommandError> {
        let auth = self.authenticate(token).await?;
        let command = CompleteHabitCommand {
            auth,
            habit_id: habit_id.to_string(),
            date: date.to_string(),
            note,
            count,
        };
        let result = self.command_handlers.complete_habit.handle(command).await?;
        Ok((result.entry, result.streak))
    }

    pub async fn list_habits(&self, token: &str) -> Result<Vec<HabitSummaryDto>, CommandError> {
        let auth = self.authenticate(token).await?;
        Ok(self.queries.habit.list_habits(&auth).await?)
    }

    pub async fn get_habit(&self, token: &str, habit_id: &str) -> Result<HabitDetailDto, CommandError> {
        let auth = self.authenticate(token).await?;
        Ok(self.queries.habit.get_habit_detail(&auth, habit_id).await?)
    }

    pub async fn get_entry(
        &self,
        token: &str,
        habit_id: &str,
        date: &str,
    ) -> Result<Option<CompletionEntryDto>, CommandError> {
        let auth = self.authenticate(token).await?;
        Ok(self.queries.habit.get_entry_for_date(&auth, habit_id, date).await?)
    }

    pub async fn weekly_analytics(&self, token: &str) -> Result<WeeklyAnalyticsDto, CommandError> {
        let auth = self.authenticate(token).await?;
        Ok(self.queries.analytics.get_weekly_analytics(&auth).await?)
    }
}
