#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use habitrack_domain::habit::{Frequency, Habit, HabitRepository};
use habitrack_domain::user::{User, UserRepository};
use habitrack_infrastructure::persistence::repositories::{
    SqliteHabitRepository, SqliteUserRepository,
};
use habitrack_infrastructure::persistence::Database;

/// Fresh in-memory database with all migrations applied.
pub async fn setup_in_memory_db() -> SqlitePool {
    let db = Database::in_memory().await.expect("open in-memory db");
    db.run_migrations().await.expect("run migrations");
    db.pool().clone()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub async fn insert_user(pool: &SqlitePool, email: &str) -> User {
    let user = User::new("Test User", email, "hash".to_string()).expect("create user");
    SqliteUserRepository::new(Arc::new(pool.clone()))
        .save(&user)
        .await
        .expect("insert user");
    user
}

pub async fn insert_habit(pool: &SqlitePool, owner: &User, frequency: Frequency, days: &[&str]) -> Habit {
    let days: Vec<String> = days.iter().map(|d| d.to_string()).collect();
    let habit = Habit::new(
        owner.id().clone(),
        "Morning run".to_string(),
        Some("5k around the park".to_string()),
        frequency,
        &days,
        "07:30",
    )
    .expect("create habit");

    SqliteHabitRepository::new(Arc::new(pool.clone()))
        .save(&habit)
        .await
        .expect("insert habit");
    habit
}
