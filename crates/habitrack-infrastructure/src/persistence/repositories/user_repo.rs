use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{is_unique_violation, RepositoryErrorMapper, SqliteRepositoryBase};
use habitrack_domain::shared::{DomainError, UserId};
use habitrack_domain::user::{Theme, User, UserRepository, UserSettings};

#[derive(FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password_hash: String,
    timezone: String,
    theme: String,
    date_format: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn try_into_user(self) -> Result<User, DomainError> {
        let theme: Theme = self.theme.parse().map_err(|_| {
            DomainError::DataIntegrity(format!("Invalid theme '{}' for user {}", self.theme, self.id))
        })?;

        Ok(User::restore(
            UserId::from_string(&self.id),
            self.name,
            self.email,
            self.password_hash,
            UserSettings {
                timezone: self.timezone,
                theme,
                date_format: self.date_format,
            },
            self.created_at,
            self.updated_at,
        ))
    }
}

const SELECT_USER: &str = r#"
    SELECT id, name, email, password_hash, timezone, theme, date_format, created_at, updated_at
    FROM users
"#;

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (id, name, email, password_hash, timezone, theme, date_format, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(id) DO UPDATE SET
                name = ?2,
                email = ?3,
                password_hash = ?4,
                timezone = ?5,
                theme = ?6,
                date_format = ?7,
                updated_at = ?9
        "#;

        let settings = user.settings();
        let result = sqlx::query(query)
            .bind(user.id().as_str())
            .bind(user.name())
            .bind(user.email())
            .bind(user.password_hash())
            .bind(&settings.timezone)
            .bind(settings.theme.as_str())
            .bind(&settings.date_format)
            .bind(user.created_at())
            .bind(user.updated_at())
            .execute(self.base.pool())
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::EmailAlreadyInUse(user.email().to_string()))
            }
            Err(e) => Err(RepositoryErrorMapper::map_sqlx_error(e, "Save user")),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ?1", SELECT_USER);

        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find user by ID")
            .await?;

        row.map(UserRow::try_into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE email = ?1", SELECT_USER);

        let row: Option<UserRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(email.trim().to_lowercase()),
                "Find user by email",
            )
            .await?;

        row.map(UserRow::try_into_user).transpose()
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM users WHERE id = ?1").bind(id.as_str()),
                "Delete user",
            )
            .await?;

        Ok(())
    }
}
