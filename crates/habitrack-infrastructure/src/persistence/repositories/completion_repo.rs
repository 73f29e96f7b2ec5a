use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::persistence::{RepositoryErrorMapper, SqliteRepositoryBase};
use habitrack_domain::completion::{CompletionEntry, CompletionRepository};
use habitrack_domain::schedule::format_calendar_date;
use habitrack_domain::shared::{DomainError, EntryId, HabitId, UserId};
use habitrack_domain::streak::StreakState;

#[derive(FromRow)]
struct EntryRow {
    id: String,
    habit_id: String,
    owner_id: String,
    date: NaiveDate,
    count: i64,
    note: Option<String>,
}

impl EntryRow {
    fn try_into_entry(self) -> Result<CompletionEntry, DomainError> {
        let count = u32::try_from(self.count).map_err(|_| {
            DomainError::DataIntegrity(format!("Invalid count {} for entry {}", self.count, self.id))
        })?;

        Ok(CompletionEntry::restore(
            EntryId::from_string(&self.id),
            HabitId::from_string(&self.habit_id),
            UserId::from_string(&self.owner_id),
            self.date,
            count,
            self.note,
        ))
    }
}

const SELECT_ENTRY: &str = r#"
    SELECT id, habit_id, owner_id, date, count, note
    FROM completion_entries
"#;

// Both inserts report a conflict as zero affected rows.
const INSERT_ENTRY: &str = r#"
    INSERT INTO completion_entries (id, habit_id, owner_id, date, count, note, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(habit_id, date) DO NOTHING
"#;

const INSERT_STREAK: &str = r#"
    INSERT INTO streaks (habit_id, owner_id, current_streak, longest_streak, last_completed_date, version, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)
    ON CONFLICT(habit_id) DO NOTHING
"#;

const UPDATE_STREAK: &str = r#"
    UPDATE streaks
    SET current_streak = ?1,
        longest_streak = ?2,
        last_completed_date = ?3,
        version = version + 1,
        updated_at = ?4
    WHERE habit_id = ?5 AND version = ?6
"#;

pub struct SqliteCompletionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCompletionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    fn into_entries(rows: Vec<EntryRow>) -> Result<Vec<CompletionEntry>, DomainError> {
        rows.into_iter().map(EntryRow::try_into_entry).collect()
    }
}

#[async_trait]
impl CompletionRepository for SqliteCompletionRepository {
    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionEntry>, DomainError> {
        let query = format!("{} WHERE habit_id = ?1 AND date = ?2", SELECT_ENTRY);

        let row: Option<EntryRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(habit_id.as_str()).bind(date),
                "Find completion entry by habit and date",
            )
            .await?;

        row.map(EntryRow::try_into_entry).transpose()
    }

    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<CompletionEntry>, DomainError> {
        let query = format!("{} WHERE habit_id = ?1 ORDER BY date DESC", SELECT_ENTRY);

        let rows: Vec<EntryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(habit_id.as_str()),
                "List completion entries by habit",
            )
            .await?;

        Self::into_entries(rows)
    }

    async fn list_by_owner_in_range(
        &self,
        owner_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionEntry>, DomainError> {
        let query = format!(
            "{} WHERE owner_id = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date DESC",
            SELECT_ENTRY
        );

        let rows: Vec<EntryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(owner_id.as_str())
                    .bind(start)
                    .bind(end),
                "List completion entries by owner in range",
            )
            .await?;

        Self::into_entries(rows)
    }

    async fn save_with_streak(
        &self,
        entry: &CompletionEntry,
        streak: &StreakState,
    ) -> Result<StreakState, DomainError> {
        let start = Instant::now();
        let now = Utc::now();

        // Dropping `tx` without commit rolls everything back.
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin completion transaction"))?;

        let inserted = sqlx::query(INSERT_ENTRY)
            .bind(entry.id().as_str())
            .bind(entry.habit_id().as_str())
            .bind(entry.owner_id().as_str())
            .bind(entry.date())
            .bind(i64::from(entry.count()))
            .bind(entry.note())
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Insert completion entry"))?;

        if inserted.rows_affected() == 0 {
            debug!(
                "[completion] entry for habit {} on {} already exists",
                entry.habit_id(),
                entry.date()
            );
            return Err(DomainError::DuplicateCompletion(format_calendar_date(
                entry.date(),
            )));
        }

        let written = if streak.is_persisted() {
            sqlx::query(UPDATE_STREAK)
                .bind(i64::from(streak.current_streak()))
                .bind(i64::from(streak.longest_streak()))
                .bind(streak.last_completed_date())
                .bind(now)
                .bind(streak.habit_id().as_str())
                .bind(streak.version())
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Update streak"))?
        } else {
            sqlx::query(INSERT_STREAK)
                .bind(streak.habit_id().as_str())
                .bind(streak.owner_id().as_str())
                .bind(i64::from(streak.current_streak()))
                .bind(i64::from(streak.longest_streak()))
                .bind(streak.last_completed_date())
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Insert streak"))?
        };

        if written.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Rollback completion"))?;
            debug!(
                "[completion] streak of habit {} moved past version {}",
                streak.habit_id(),
                streak.version()
            );
            return Err(DomainError::ConcurrentModification(format!(
                "Streak of habit {} was modified concurrently",
                streak.habit_id()
            )));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit completion"))?;

        info!(
            "[completion] stored entry {} for habit {} on {} in {:?}",
            entry.id(),
            entry.habit_id(),
            entry.date(),
            start.elapsed()
        );

        Ok(streak.clone().with_version(streak.version() + 1))
    }
}
