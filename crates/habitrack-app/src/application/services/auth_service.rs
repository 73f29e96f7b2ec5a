use chrono::Duration;
use log::{debug, info};
use std::sync::Arc;

use crate::application::dtos::{AuthSessionDto, UserDto};
use habitrack_domain::session::{AuthContext, Session, SessionRepository};
use habitrack_domain::shared::{Clock, DomainError, UserId};
use habitrack_domain::user::{User, UserRepository};
use habitrack_infrastructure::security::generate_session_token;

/// Issues and resolves login sessions.
///
/// Handlers never read session state themselves; they receive the
/// [`AuthContext`] produced by [`AuthService::authenticate`].
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
        session_days: i64,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            clock,
            session_ttl: Duration::days(session_days),
        }
    }

    /// Resolve a session token into the caller's identity
    pub async fn authenticate(&self, token: &str) -> Result<AuthContext, DomainError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DomainError::Unauthorized("Missing session token".to_string()));
        }

        let session = self
            .session_repo
            .find_by_token(token)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Invalid session".to_string()))?;

        if !session.is_valid_at(self.clock.now()) {
            debug!("[auth] session of user {} expired", session.user_id());
            self.session_repo.delete(session.user_id()).await?;
            return Err(DomainError::Unauthorized("Session expired".to_string()));
        }

        let user = self
            .user_repo
            .find_by_id(session.user_id())
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Invalid session".to_string()))?;

        Ok(AuthContext {
            user_id: user.id().clone(),
            email: user.email().to_string(),
        })
    }

    /// Replace any previous session of `user` with a fresh one
    pub async fn start_session(&self, user: &User) -> Result<Session, DomainError> {
        let session = Session::new(
            user.id().clone(),
            generate_session_token(),
            self.clock.now(),
            self.session_ttl,
        )?;

        self.session_repo.save(&session).await?;
        info!(
            "[auth] session started for user {} (expires {})",
            user.id(),
            session.expires_at()
        );

        Ok(session)
    }

    pub async fn end_session(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.session_repo.delete(user_id).await?;
        info!("[auth] session ended for user {}", user_id);
        Ok(())
    }

    pub fn session_dto(user: &User, session: &Session) -> AuthSessionDto {
        AuthSessionDto {
            user: UserDto::from(user),
            token: session.token().to_string(),
            expires_at: session.expires_at().to_rfc3339(),
        }
    }
}
