mod test_helpers;

use std::sync::Arc;

use habitrack_app::presentation::bootstrap::wire_app_state;
use habitrack_app::AppState;
use habitrack_domain::shared::FixedClock;
use habitrack_infrastructure::config::HabitrackConfig;
use habitrack_infrastructure::persistence::Database;
use tempfile::TempDir;
use test_helpers::new_habit;

fn file_config(dir: &TempDir) -> HabitrackConfig {
    HabitrackConfig {
        db_path: dir.path().join("data").join("habitrack.db"),
        log_dir: dir.path().join("logs"),
        ..test_helpers::test_config()
    }
}

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    let token = {
        let app = AppState::new(&config).await.unwrap();
        let session = app
            .register(
                "Persistent".to_string(),
                "persist@example.com".to_string(),
                "password123".to_string(),
            )
            .await
            .unwrap();
        app.create_habit(&session.token, new_habit("Floss", "daily", &[]))
            .await
            .unwrap();
        app.runtime.pool.close().await;
        session.token
    };

    assert!(config.db_path.exists());

    let app = AppState::new(&config).await.unwrap();
    let habits = app.list_habits(&token).await.unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].habit.name, "Floss");
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = HabitrackConfig {
        completion_retries: 0,
        ..file_config(&dir)
    };

    assert!(AppState::new(&config).await.is_err());
}

#[tokio::test]
async fn test_out_of_range_session_lifetime_is_rejected() {
    let config = HabitrackConfig {
        session_days: 200_000_000_000_000,
        ..test_helpers::test_config()
    };

    let database = Database::in_memory().await.unwrap();
    database.run_migrations().await.unwrap();

    let wired = wire_app_state(
        database,
        Arc::new(FixedClock::on(test_helpers::date("2024-01-10"))),
        &config,
    )
    .await;
    assert!(wired.is_err());
}
