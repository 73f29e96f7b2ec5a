use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use habitrack_domain::shared::{DomainError, HabitId, UserId};
use habitrack_domain::streak::{StreakRepository, StreakState};

#[derive(FromRow)]
struct StreakRow {
    habit_id: String,
    owner_id: String,
    current_streak: i64,
    longest_streak: i64,
    last_completed_date: Option<NaiveDate>,
    version: i64,
}

impl StreakRow {
    fn try_into_streak(self) -> Result<StreakState, DomainError> {
        let to_u32 = |value: i64, column: &str| {
            u32::try_from(value).map_err(|_| {
                DomainError::DataIntegrity(format!(
                    "Invalid {} {} for habit {}",
                    column, value, self.habit_id
                ))
            })
        };

        let current = to_u32(self.current_streak, "current_streak")?;
        let longest = to_u32(self.longest_streak, "longest_streak")?;

        Ok(StreakState::restore(
            HabitId::from_string(&self.habit_id),
            UserId::from_string(&self.owner_id),
            current,
            longest,
            self.last_completed_date,
            self.version,
        ))
    }
}

const SELECT_STREAK: &str = r#"
    SELECT habit_id, owner_id, current_streak, longest_streak, last_completed_date, version
    FROM streaks
"#;

pub struct SqliteStreakRepository {
    base: SqliteRepositoryBase,
}

impl SqliteStreakRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl StreakRepository for SqliteStreakRepository {
    async fn find_by_habit(&self, habit_id: &HabitId) -> Result<Option<StreakState>, DomainError> {
        let query = format!("{} WHERE habit_id = ?1", SELECT_STREAK);

        let row: Option<StreakRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(habit_id.as_str()),
                "Find streak by habit",
            )
            .await?;

        row.map(StreakRow::try_into_streak).transpose()
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<StreakState>, DomainError> {
        let query = format!("{} WHERE owner_id = ?1", SELECT_STREAK);

        let rows: Vec<StreakRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(owner_id.as_str()),
                "List streaks by owner",
            )
            .await?;

        rows.into_iter().map(StreakRow::try_into_streak).collect()
    }
}
