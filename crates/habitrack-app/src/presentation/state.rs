use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::ActivityLogEventHandler;
use crate::application::queries::{AnalyticsQueryService, HabitQueryService, UserQueryService};
use crate::application::services::AuthService;
use habitrack_domain::completion::CompletionRepository;
use habitrack_domain::events::EventBus;
use habitrack_domain::habit::HabitRepository;
use habitrack_domain::session::SessionRepository;
use habitrack_domain::shared::Clock;
use habitrack_domain::streak::StreakRepository;
use habitrack_domain::user::{PasswordHasher, UserRepository};
use habitrack_infrastructure::config::HabitrackConfig;
use habitrack_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub register_user: Arc<RegisterUserCommandHandler>,
    pub login: Arc<LoginCommandHandler>,
    pub logout: Arc<LogoutCommandHandler>,
    pub change_password: Arc<ChangePasswordCommandHandler>,
    pub update_profile: Arc<UpdateProfileCommandHandler>,
    pub delete_account: Arc<DeleteAccountCommandHandler>,
    pub create_habit: Arc<CreateHabitCommandHandler>,
    pub update_habit: Arc<UpdateHabitCommandHandler>,
    pub toggle_archive_habit: Arc<ToggleArchiveHabitCommandHandler>,
    pub delete_habit: Arc<DeleteHabitCommandHandler>,
    pub complete_habit: Arc<CompleteHabitCommandHandler>,
}

pub struct Runtime {
    pub pool: Arc<SqlitePool>,
    pub db: Arc<Database>,
    pub event_bus: Arc<dyn EventBus>,
    pub clock: Arc<dyn Clock>,
    pub activity_log: ActivityLogEventHandler,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub habit: Arc<dyn HabitRepository>,
    pub completion: Arc<dyn CompletionRepository>,
    pub streak: Arc<dyn StreakRepository>,
}

pub struct Services {
    pub auth: Arc<AuthService>,
    pub password_hasher: Arc<dyn PasswordHasher>,
}

pub struct Queries {
    pub habit: Arc<HabitQueryService>,
    pub user: Arc<UserQueryService>,
    pub analytics: Arc<AnalyticsQueryService>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    /// Open the configured database and wire everything on top of it
    pub async fn new(config: &HabitrackConfig) -> anyhow::Result<Self> {
        crate::presentation::bootstrap::build_app_state(config).await
    }
}
