use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::ActivityLogEventHandler;
use crate::application::queries::{AnalyticsQueryService, HabitQueryService, UserQueryService};
use crate::application::services::AuthService;
use crate::presentation::state::{
    AppState, CommandHandlers, Queries, Repositories, Runtime, Services,
};
use habitrack_domain::completion::CompletionRepository;
use habitrack_domain::events::habit_events::*;
use habitrack_domain::events::{EventBus, TypedEventHandlerWrapper};
use habitrack_domain::habit::HabitRepository;
use habitrack_domain::session::SessionRepository;
use habitrack_domain::shared::{Clock, SystemClock};
use habitrack_domain::streak::StreakRepository;
use habitrack_domain::user::{PasswordHasher, UserRepository};
use habitrack_infrastructure::config::HabitrackConfig;
use habitrack_infrastructure::events::InMemoryEventBus;
use habitrack_infrastructure::logging::{get_log_dir, init_logger};
use habitrack_infrastructure::persistence::{
    repositories::{
        SqliteCompletionRepository, SqliteHabitRepository, SqliteSessionRepository,
        SqliteStreakRepository, SqliteUserRepository,
    },
    Database,
};
use habitrack_infrastructure::security::Argon2PasswordHasher;

pub async fn build_app_state(config: &HabitrackConfig) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    config.validate()?;
    init_logger(&config.log_dir).context("Failed to initialize logger")?;
    if let Some(log_dir) = get_log_dir() {
        info!("Log directory: {}", log_dir.display());
    }

    let db_path = config.db_path_str()?;
    info!("Database path: {}", db_path);

    let started_at = Instant::now();
    let database = Database::new(db_path, config.db_max_connections).await?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let state = wire_app_state(database, Arc::new(SystemClock), config).await?;

    info!(
        "✓ Application state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );
    Ok(state)
}

/// Build repositories, services and handlers over an already migrated database
pub async fn wire_app_state(
    database: Database,
    clock: Arc<dyn Clock>,
    config: &HabitrackConfig,
) -> anyhow::Result<AppState> {
    config.validate()?;

    let pool = Arc::new(database.pool().clone());

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let session_repo =
        Arc::new(SqliteSessionRepository::new(pool.clone())) as Arc<dyn SessionRepository>;
    let habit_repo = Arc::new(SqliteHabitRepository::new(pool.clone())) as Arc<dyn HabitRepository>;
    let completion_repo = Arc::new(SqliteCompletionRepository::new(pool.clone()))
        as Arc<dyn CompletionRepository>;
    let streak_repo =
        Arc::new(SqliteStreakRepository::new(pool.clone())) as Arc<dyn StreakRepository>;

    let password_hasher = Arc::new(Argon2PasswordHasher::new()) as Arc<dyn PasswordHasher>;

    let event_bus = Arc::new(InMemoryEventBus::new());
    let activity_log = ActivityLogEventHandler::new();

    event_bus
        .subscribe::<UserRegistered>(Arc::new(
            TypedEventHandlerWrapper::<UserRegistered, _>::new(activity_log.clone()),
        ))
        .await;
    event_bus
        .subscribe::<HabitCreated>(Arc::new(TypedEventHandlerWrapper::<HabitCreated, _>::new(
            activity_log.clone(),
        )))
        .await;
    event_bus
        .subscribe::<HabitUpdated>(Arc::new(TypedEventHandlerWrapper::<HabitUpdated, _>::new(
            activity_log.clone(),
        )))
        .await;
    event_bus
        .subscribe::<HabitDeleted>(Arc::new(TypedEventHandlerWrapper::<HabitDeleted, _>::new(
            activity_log.clone(),
        )))
        .await;
    event_bus
        .subscribe::<HabitCompleted>(Arc::new(
            TypedEventHandlerWrapper::<HabitCompleted, _>::new(activity_log.clone()),
        ))
        .await;

    let event_bus = event_bus as Arc<dyn EventBus>;
    info!("✓ Event bus initialized and handlers registered");

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        session_repo.clone(),
        clock.clone(),
        config.session_days,
    ));

    let command_handlers = CommandHandlers {
        register_user: Arc::new(RegisterUserCommandHandler::new(
            user_repo.clone(),
            password_hasher.clone(),
            auth_service.clone(),
            event_bus.clone(),
        )),
        login: Arc::new(LoginCommandHandler::new(
            user_repo.clone(),
            password_hasher.clone(),
            auth_service.clone(),
        )),
        logout: Arc::new(LogoutCommandHandler::new(auth_service.clone())),
        change_password: Arc::new(ChangePasswordCommandHandler::new(
            user_repo.clone(),
            password_hasher.clone(),
        )),
        update_profile: Arc::new(UpdateProfileCommandHandler::new(user_repo.clone())),
        delete_account: Arc::new(DeleteAccountCommandHandler::new(user_repo.clone())),
        create_habit: Arc::new(CreateHabitCommandHandler::new(
            habit_repo.clone(),
            event_bus.clone(),
        )),
        update_habit: Arc::new(UpdateHabitCommandHandler::new(
            habit_repo.clone(),
            event_bus.clone(),
        )),
        toggle_archive_habit: Arc::new(ToggleArchiveHabitCommandHandler::new(
            habit_repo.clone(),
            event_bus.clone(),
        )),
        delete_habit: Arc::new(DeleteHabitCommandHandler::new(
            habit_repo.clone(),
            event_bus.clone(),
        )),
        complete_habit: Arc::new(
            CompleteHabitCommandHandler::new(
                habit_repo.clone(),
                completion_repo.clone(),
                streak_repo.clone(),
                event_bus.clone(),
                clock.clone(),
            )
            .with_max_attempts(config.completion_retries),
        ),
    };

    let queries = Queries {
        habit: Arc::new(HabitQueryService::new(
            habit_repo.clone(),
            completion_repo.clone(),
            streak_repo.clone(),
            clock.clone(),
        )),
        user: Arc::new(UserQueryService::new(user_repo.clone())),
        analytics: Arc::new(AnalyticsQueryService::new(
            habit_repo.clone(),
            completion_repo.clone(),
            streak_repo.clone(),
            clock.clone(),
        )),
    };

    Ok(AppState {
        runtime: Runtime {
            pool,
            db: Arc::new(database),
            event_bus,
            clock,
            activity_log,
        },
        repositories: Repositories {
            user: user_repo,
            session: session_repo,
            habit: habit_repo,
            completion: completion_repo,
            streak: streak_repo,
        },
        services: Services {
            auth: auth_service,
            password_hasher,
        },
        queries,
        command_handlers,
    })
}
