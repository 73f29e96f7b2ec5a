use serde::{Deserialize, Serialize};

use habitrack_domain::user::{User, UserSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettingsDto {
    pub timezone: String,
    pub theme: String,
    pub date_format: String,
}

impl From<&UserSettings> for UserSettingsDto {
    fn from(settings: &UserSettings) -> Self {
        Self {
            timezone: settings.timezone.clone(),
            theme: settings.theme.to_string(),
            date_format: settings.date_format.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub settings: UserSettingsDto,
    pub created_at: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            settings: UserSettingsDto::from(user.settings()),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// Returned by register and login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSessionDto {
    pub user: UserDto,
    pub token: String,
    pub expires_at: String,
}
