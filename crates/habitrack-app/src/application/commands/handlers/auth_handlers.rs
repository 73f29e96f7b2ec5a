use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::services::AuthService;
use habitrack_domain::events::habit_events::UserRegistered;
use habitrack_domain::events::EventBus;
use habitrack_domain::shared::DomainError;
use habitrack_domain::user::{PasswordHasher, User, UserRepository};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Register user command handler
pub struct RegisterUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    auth_service: Arc<AuthService>,
    event_bus: Arc<dyn EventBus>,
}

impl RegisterUserCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        auth_service: Arc<AuthService>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            auth_service,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserCommandHandler {
    type Result = AuthResult;

    async fn handle(&self, cmd: RegisterUserCommand) -> Result<Self::Result, DomainError> {
        let name = User::validate_name(&cmd.name)?;
        let email = User::normalize_email(&cmd.email)?;
        let password = User::validate_password(&cmd.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailAlreadyInUse(email));
        }

        let password_hash = self.password_hasher.hash(&password)?;
        let user = User::new(&name, &email, password_hash)?;
        self.user_repo.save(&user).await?;

        info!("[auth] registered user {} <{}>", user.id(), user.email());

        let session = self.auth_service.start_session(&user).await?;

        let event = UserRegistered {
            user_id: user.id().clone(),
            email: user.email().to_string(),
            occurred_at: Utc::now(),
        };
        self.event_bus.publish(Box::new(event)).await?;

        Ok(AuthResult {
            session: AuthService::session_dto(&user, &session),
        })
    }
}

/// Login command handler.
///
/// Unknown email and wrong password produce the same error.
pub struct LoginCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    auth_service: Arc<AuthService>,
}

impl LoginCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            auth_service,
        }
    }
}

#[async_trait]
impl CommandHandler<LoginCommand> for LoginCommandHandler {
    type Result = AuthResult;

    async fn handle(&self, cmd: LoginCommand) -> Result<Self::Result, DomainError> {
        let email = cmd.email.trim().to_lowercase();
        let password = cmd.password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
        }

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            warn!("[auth] login attempt for unknown email");
            return Err(DomainError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
        };

        if !self.password_hasher.verify(password, user.password_hash())? {
            warn!("[auth] wrong password for user {}", user.id());
            return Err(DomainError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
        }

        let session = self.auth_service.start_session(&user).await?;

        Ok(AuthResult {
            session: AuthService::session_dto(&user, &session),
        })
    }
}

pub struct LogoutCommandHandler {
    auth_service: Arc<AuthService>,
}

impl LogoutCommandHandler {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}

#[async_trait]
impl CommandHandler<LogoutCommand> for LogoutCommandHandler {
    type Result = LogoutResult;

    async fn handle(&self, cmd: LogoutCommand) -> Result<Self::Result, DomainError> {
        self.auth_service.end_session(&cmd.auth.user_id).await?;
        Ok(LogoutResult { success: true })
    }
}
