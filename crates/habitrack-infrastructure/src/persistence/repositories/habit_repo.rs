use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use habitrack_domain::habit::{Frequency, Habit, HabitRepository};
use habitrack_domain::schedule::Weekday;
use habitrack_domain::shared::{DomainError, HabitId, UserId};

#[derive(FromRow)]
struct HabitRow {
    id: String,
    owner_id: String,
    name: String,
    description: Option<String>,
    frequency: String,
    scheduled_days: String,
    reminder_time: String,
    archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let corrupt = |what: &str, value: &str| {
            DomainError::DataIntegrity(format!("Invalid {} '{}' for habit {}", what, value, self.id))
        };

        let frequency: Frequency = self
            .frequency
            .parse()
            .map_err(|_| corrupt("frequency", &self.frequency))?;

        let scheduled_days = self
            .scheduled_days
            .split(',')
            .filter(|code| !code.is_empty())
            .map(|code| code.parse::<Weekday>().map_err(|_| corrupt("weekday", code)))
            .collect::<Result<Vec<_>, _>>()?;

        let reminder_time = NaiveTime::parse_from_str(&self.reminder_time, Habit::REMINDER_TIME_FORMAT)
            .map_err(|_| corrupt("reminder time", &self.reminder_time))?;

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            UserId::from_string(&self.owner_id),
            self.name,
            self.description,
            frequency,
            scheduled_days,
            reminder_time,
            self.archived,
            self.created_at,
            self.updated_at,
        ))
    }
}

fn join_days(habit: &Habit) -> String {
    habit
        .scheduled_days()
        .iter()
        .map(|day| day.code())
        .collect::<Vec<_>>()
        .join(",")
}

const SELECT_HABIT: &str = r#"
    SELECT id, owner_id, name, description, frequency, scheduled_days, reminder_time,
           archived, created_at, updated_at
    FROM habits
"#;

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    fn into_habits(rows: Vec<HabitRow>) -> Result<Vec<Habit>, DomainError> {
        rows.into_iter().map(HabitRow::try_into_habit).collect()
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO habits (id, owner_id, name, description, frequency, scheduled_days,
                                reminder_time, archived, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO UPDATE SET
                name = ?3,
                description = ?4,
                frequency = ?5,
                scheduled_days = ?6,
                reminder_time = ?7,
                archived = ?8,
                updated_at = ?10
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.id().as_str())
                    .bind(habit.owner_id().as_str())
                    .bind(habit.name())
                    .bind(habit.description())
                    .bind(habit.frequency().as_str())
                    .bind(join_days(habit))
                    .bind(habit.reminder_time_label())
                    .bind(habit.is_archived())
                    .bind(habit.created_at())
                    .bind(habit.updated_at()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let query = format!("{} WHERE id = ?1", SELECT_HABIT);

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find habit by ID")
            .await?;

        row.map(HabitRow::try_into_habit).transpose()
    }

    async fn find_owned(
        &self,
        id: &HabitId,
        owner_id: &UserId,
    ) -> Result<Option<Habit>, DomainError> {
        let query = format!("{} WHERE id = ?1 AND owner_id = ?2", SELECT_HABIT);

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(id.as_str())
                    .bind(owner_id.as_str()),
                "Find owned habit",
            )
            .await?;

        row.map(HabitRow::try_into_habit).transpose()
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let query = format!(
            "{} WHERE owner_id = ?1 ORDER BY created_at DESC, rowid DESC",
            SELECT_HABIT
        );

        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(owner_id.as_str()),
                "List habits by owner",
            )
            .await?;

        Self::into_habits(rows)
    }

    async fn list_active_by_owner(&self, owner_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let query = format!(
            "{} WHERE owner_id = ?1 AND archived = 0 ORDER BY created_at DESC, rowid DESC",
            SELECT_HABIT
        );

        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(owner_id.as_str()),
                "List active habits by owner",
            )
            .await?;

        Self::into_habits(rows)
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        // entries and streak go with it (ON DELETE CASCADE)
        self.base
            .execute(
                sqlx::query("DELETE FROM habits WHERE id = ?1").bind(id.as_str()),
                "Delete habit",
            )
            .await?;

        Ok(())
    }
}
