use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use habitrack_domain::session::{Session, SessionRepository};
use habitrack_domain::shared::{DomainError, UserId};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct SessionRow {
    user_id: String,
    token: String,
    expires_at: DateTime<Utc>,
    last_login_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session::restore(
            UserId::from_string(&self.user_id),
            self.token,
            self.expires_at,
            self.last_login_at,
        )
    }
}

pub struct SqliteSessionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO sessions (user_id, token, expires_at, last_login_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id) DO UPDATE SET
                token = ?2,
                expires_at = ?3,
                last_login_at = ?4
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(session.user_id().as_str())
                    .bind(session.token())
                    .bind(session.expires_at())
                    .bind(session.last_login_at()),
                "Save session",
            )
            .await?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let query =
            "SELECT user_id, token, expires_at, last_login_at FROM sessions WHERE token = ?1";

        let row: Option<SessionRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(token), "Find session by token")
            .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Session>, DomainError> {
        let query =
            "SELECT user_id, token, expires_at, last_login_at FROM sessions WHERE user_id = ?1";

        let row: Option<SessionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(user_id.as_str()),
                "Find session by user ID",
            )
            .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM sessions WHERE user_id = ?1").bind(user_id.as_str()),
                "Delete session",
            )
            .await?;

        Ok(())
    }
}
