use crate::application::commands::command_handler::Command;
use crate::application::dtos::{AuthSessionDto, UserDto};
use habitrack_domain::session::AuthContext;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Command for RegisterUserCommand {}

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl Command for LoginCommand {}

/// Register and login both end with a fresh session
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub session: AuthSessionDto,
}

#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub auth: AuthContext,
}

impl Command for LogoutCommand {}

#[derive(Debug, Clone)]
pub struct LogoutResult {
    pub success: bool,
}

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    pub auth: AuthContext,
    pub current_password: String,
    pub new_password: String,
}

impl Command for ChangePasswordCommand {}

#[derive(Debug, Clone)]
pub struct ChangePasswordResult {
    pub success: bool,
}

/// Partial settings change; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub timezone: Option<String>,
    pub theme: Option<String>,
    pub date_format: Option<String>,
}

/// Partial profile update; `None` keeps the current value
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub auth: AuthContext,
    pub name: Option<String>,
    pub email: Option<String>,
    pub settings: Option<SettingsPatch>,
}

impl Command for UpdateProfileCommand {}

#[derive(Debug, Clone)]
pub struct UpdateProfileResult {
    pub user: UserDto,
}

#[derive(Debug, Clone)]
pub struct DeleteAccountCommand {
    pub auth: AuthContext,
}

impl Command for DeleteAccountCommand {}

#[derive(Debug, Clone)]
pub struct DeleteAccountResult {
    pub success: bool,
}
