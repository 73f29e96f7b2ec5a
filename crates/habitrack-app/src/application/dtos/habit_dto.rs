use serde::{Deserialize, Serialize};

use habitrack_domain::completion::CompletionEntry;
use habitrack_domain::habit::Habit;
use habitrack_domain::schedule::{format_calendar_date, CompletionStatus};
use habitrack_domain::streak::StreakState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub frequency: String,
    pub days: Vec<String>,
    pub reminder_time: String, // HH:MM
    pub archived: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            id: habit.id().to_string(),
            name: habit.name().to_string(),
            description: habit.description().map(str::to_string),
            frequency: habit.frequency().to_string(),
            days: habit
                .scheduled_days()
                .iter()
                .map(|day| day.code().to_string())
                .collect(),
            reminder_time: habit.reminder_time_label(),
            archived: habit.is_archived(),
            created_at: habit.created_at().to_rfc3339(),
            updated_at: habit.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEntryDto {
    pub id: String,
    pub habit_id: String,
    pub date: String, // YYYY-MM-DD
    pub count: u32,
    pub note: Option<String>,
}

impl From<&CompletionEntry> for CompletionEntryDto {
    fn from(entry: &CompletionEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            habit_id: entry.habit_id().to_string(),
            date: format_calendar_date(entry.date()),
            count: entry.count(),
            note: entry.note().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakDto {
    pub habit_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed_date: Option<String>,
}

impl From<&StreakState> for StreakDto {
    fn from(streak: &StreakState) -> Self {
        Self {
            habit_id: streak.habit_id().to_string(),
            current_streak: streak.current_streak(),
            longest_streak: streak.longest_streak(),
            last_completed_date: streak.last_completed_date().map(format_calendar_date),
        }
    }
}

/// Status of a habit for today, as shown in lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionStatusDto {
    pub kind: String,
    pub label: String,
    pub next_day: Option<String>,
}

impl From<&CompletionStatus> for CompletionStatusDto {
    fn from(status: &CompletionStatus) -> Self {
        let next_day = match status {
            CompletionStatus::CompleteLater { next_day } => next_day.clone(),
            _ => None,
        };

        Self {
            kind: status.kind().to_string(),
            label: status.label(),
            next_day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitSummaryDto {
    pub habit: HabitDto,
    pub status: CompletionStatusDto,
    pub streak: StreakDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDetailDto {
    pub habit: HabitDto,
    pub entries: Vec<CompletionEntryDto>,
    pub streak: StreakDto,
}
