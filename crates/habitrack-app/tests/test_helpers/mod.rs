#![allow(dead_code)]

use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

use habitrack_app::presentation::bootstrap::wire_app_state;
use habitrack_app::presentation::NewHabit;
use habitrack_app::AppState;
use habitrack_domain::shared::FixedClock;
use habitrack_infrastructure::config::HabitrackConfig;
use habitrack_infrastructure::persistence::Database;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn test_config() -> HabitrackConfig {
    HabitrackConfig {
        db_path: PathBuf::from(":memory:"),
        log_dir: std::env::temp_dir().join("habitrack-tests"),
        session_days: 7,
        completion_retries: 3,
        db_max_connections: 1,
    }
}

/// Fully wired state over a migrated in-memory database, pinned to `today`
pub async fn app_on(today: &str) -> AppState {
    let database = Database::in_memory().await.unwrap();
    database.run_migrations().await.unwrap();

    wire_app_state(database, Arc::new(FixedClock::on(date(today))), &test_config())
        .await
        .unwrap()
}

/// Register a user and return the session token
pub async fn register(app: &AppState, email: &str) -> String {
    app.register(
        "Tester".to_string(),
        email.to_string(),
        "password123".to_string(),
    )
    .await
    .unwrap()
    .token
}

pub fn new_habit(name: &str, frequency: &str, days: &[&str]) -> NewHabit {
    NewHabit {
        name: name.to_string(),
        description: None,
        frequency: frequency.to_string(),
        days: days.iter().map(|d| d.to_string()).collect(),
        reminder_time: "08:00".to_string(),
    }
}
