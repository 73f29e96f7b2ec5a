use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::dtos::UserDto;
use habitrack_domain::shared::{DomainError, UserId};
use habitrack_domain::user::{PasswordHasher, Theme, User, UserRepository, UserSettings};

async fn load_user(repo: &dyn UserRepository, user_id: &UserId) -> Result<User, DomainError> {
    repo.find_by_id(user_id)
        .await?
        .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))
}

pub struct ChangePasswordCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }
}

#[async_trait]
impl CommandHandler<ChangePasswordCommand> for ChangePasswordCommandHandler {
    type Result = ChangePasswordResult;

    async fn handle(&self, cmd: ChangePasswordCommand) -> Result<Self::Result, DomainError> {
        let mut user = load_user(self.user_repo.as_ref(), &cmd.auth.user_id).await?;

        let new_password = User::validate_password(&cmd.new_password)?;

        if !self
            .password_hasher
            .verify(cmd.current_password.trim(), user.password_hash())?
        {
            return Err(DomainError::InvalidCredentials(
                "Current password is incorrect".to_string(),
            ));
        }

        if self.password_hasher.verify(&new_password, user.password_hash())? {
            return Err(DomainError::Validation(
                "New password must be different from current password".to_string(),
            ));
        }

        user.change_password_hash(self.password_hasher.hash(&new_password)?);
        self.user_repo.save(&user).await?;

        info!("[auth] password changed for user {}", user.id());

        Ok(ChangePasswordResult { success: true })
    }
}

pub struct UpdateProfileCommandHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl UpdateProfileCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateProfileCommand> for UpdateProfileCommandHandler {
    type Result = UpdateProfileResult;

    async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Self::Result, DomainError> {
        let mut user = load_user(self.user_repo.as_ref(), &cmd.auth.user_id).await?;

        if let Some(name) = cmd.name {
            user.rename(&name)?;
        }

        if let Some(email) = cmd.email {
            let email = User::normalize_email(&email)?;
            if email != user.email() {
                if let Some(other) = self.user_repo.find_by_email(&email).await? {
                    if other.id() != user.id() {
                        return Err(DomainError::EmailAlreadyInUse(email));
                    }
                }
                user.change_email(&email)?;
            }
        }

        if let Some(patch) = cmd.settings {
            let current = user.settings().clone();
            let theme: Theme = match patch.theme {
                Some(theme) => theme.trim().parse()?,
                None => current.theme,
            };
            let settings = UserSettings {
                timezone: patch
                    .timezone
                    .map(|tz| tz.trim().to_string())
                    .unwrap_or(current.timezone),
                theme,
                date_format: patch
                    .date_format
                    .map(|f| f.trim().to_string())
                    .unwrap_or(current.date_format),
            };
            user.update_settings(settings)?;
        }

        self.user_repo.save(&user).await?;
        info!("[auth] profile updated for user {}", user.id());

        Ok(UpdateProfileResult {
            user: UserDto::from(&user),
        })
    }
}

/// Removes the account; sessions, habits, entries and streaks cascade
pub struct DeleteAccountCommandHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl DeleteAccountCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteAccountCommand> for DeleteAccountCommandHandler {
    type Result = DeleteAccountResult;

    async fn handle(&self, cmd: DeleteAccountCommand) -> Result<Self::Result, DomainError> {
        let user = load_user(self.user_repo.as_ref(), &cmd.auth.user_id).await?;

        self.user_repo.delete(user.id()).await?;
        info!("[auth] account {} deleted", user.id());

        Ok(DeleteAccountResult { success: true })
    }
}
