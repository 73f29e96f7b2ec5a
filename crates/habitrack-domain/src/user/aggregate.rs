use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::{DomainError, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(DomainError::Validation(format!(
                "Theme must be light, dark or system (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub timezone: String,
    pub theme: Theme,
    pub date_format: String,
}

impl UserSettings {
    pub const TIMEZONES: [&'static str; 9] =
        ["UTC", "GMT", "EST", "CST", "MST", "PST", "IST", "JST", "AEST"];
    pub const DATE_FORMATS: [&'static str; 4] =
        ["YYYY-MM-DD", "MM/DD/YYYY", "DD/MM/YYYY", "DD-MMM-YYYY"];

    pub fn validate(&self) -> Result<(), DomainError> {
        if !Self::TIMEZONES.contains(&self.timezone.as_str()) {
            return Err(DomainError::Validation(format!(
                "Invalid timezone: {}",
                self.timezone
            )));
        }
        if !Self::DATE_FORMATS.contains(&self.date_format.as_str()) {
            return Err(DomainError::Validation(format!(
                "Invalid date format setting: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            theme: Theme::System,
            date_format: "YYYY-MM-DD".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password_hash: String,
    settings: UserSettings,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub const MAX_NAME_LEN: usize = 60;
    pub const MIN_PASSWORD_LEN: usize = 8;

    /// `password_hash` must already be hashed; see [`User::validate_password`].
    pub fn new(name: &str, email: &str, password_hash: String) -> Result<Self, DomainError> {
        let now = Utc::now();

        Ok(Self {
            id: UserId::new(),
            name: Self::validate_name(name)?,
            email: Self::normalize_email(email)?,
            password_hash,
            settings: UserSettings::default(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        settings: UserSettings,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            settings,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = Self::validate_name(name)?;
        self.touch();
        Ok(())
    }

    pub fn change_email(&mut self, email: &str) -> Result<(), DomainError> {
        self.email = Self::normalize_email(email)?;
        self.touch();
        Ok(())
    }

    pub fn change_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    pub fn update_settings(&mut self, settings: UserSettings) -> Result<(), DomainError> {
        settings.validate()?;
        self.settings = settings;
        self.touch();
        Ok(())
    }

    /// Trimmed, 1..=60 characters.
    pub fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Name must be a non-empty string".to_string(),
            ));
        }
        if trimmed.chars().count() > Self::MAX_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "Name must be {} characters or less",
                Self::MAX_NAME_LEN
            )));
        }
        Ok(trimmed.to_string())
    }

    /// Trimmed and lower-cased; must look like `local@domain.tld`.
    pub fn normalize_email(email: &str) -> Result<String, DomainError> {
        let normalized = email.trim().to_lowercase();

        let valid = match normalized.split_once('@') {
            Some((local, domain)) => {
                let no_space = !normalized.chars().any(char::is_whitespace);
                let dotted = domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
                no_space && !local.is_empty() && !domain.contains('@') && dotted
            }
            None => false,
        };

        if !valid {
            return Err(DomainError::Validation("Invalid email format".to_string()));
        }

        Ok(normalized)
    }

    /// Plaintext password rule; returns the trimmed password to hash.
    pub fn validate_password(password: &str) -> Result<String, DomainError> {
        let trimmed = password.trim();
        if trimmed.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "Password must be at least {} characters",
                Self::MIN_PASSWORD_LEN
            )));
        }
        Ok(trimmed.to_string())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_fields() {
        let user = User::new("  Ada  ", "  Ada@Example.COM ", "hash".to_string()).unwrap();

        assert_eq!(user.name(), "Ada");
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.settings(), &UserSettings::default());
        assert_eq!(user.settings().theme, Theme::System);
    }

    #[test]
    fn test_email_validation() {
        for ok in ["a@b.co", "first.last@mail.example.org"] {
            assert!(User::normalize_email(ok).is_ok(), "{} should pass", ok);
        }
        for bad in ["", "plain", "@b.co", "a@b", "a@.co", "a@co.", "a b@c.de", "a@b@c.de"] {
            assert!(User::normalize_email(bad).is_err(), "{} should fail", bad);
        }
    }

    #[test]
    fn test_name_validation() {
        assert!(User::validate_name("   ").is_err());
        assert!(User::validate_name(&"n".repeat(61)).is_err());
        assert_eq!(User::validate_name(&"n".repeat(60)).unwrap().len(), 60);
    }

    #[test]
    fn test_password_validation() {
        assert!(User::validate_password("short").is_err());
        assert!(User::validate_password("   seven7   ").is_err());
        assert_eq!(User::validate_password(" longenough ").unwrap(), "longenough");
    }

    #[test]
    fn test_update_settings_validates() {
        let mut user = User::new("Ada", "ada@example.com", "hash".to_string()).unwrap();

        let bad_zone = UserSettings {
            timezone: "Mars/Olympus".to_string(),
            ..UserSettings::default()
        };
        assert!(user.update_settings(bad_zone).is_err());
        assert_eq!(user.settings(), &UserSettings::default());

        let bad_format = UserSettings {
            date_format: "YY.MM.DD".to_string(),
            ..UserSettings::default()
        };
        assert!(user.update_settings(bad_format).is_err());

        let ok = UserSettings {
            timezone: "JST".to_string(),
            theme: Theme::Light,
            date_format: "DD/MM/YYYY".to_string(),
        };
        user.update_settings(ok.clone()).unwrap();
        assert_eq!(user.settings(), &ok);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
