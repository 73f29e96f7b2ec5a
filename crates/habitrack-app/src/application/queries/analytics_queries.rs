use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dtos::{
    HabitPerformanceDto, StreakHighlightDto, WeeklyAnalyticsDto, WeeklyStatisticsDto,
};
use habitrack_domain::completion::{CompletionEntry, CompletionRepository};
use habitrack_domain::habit::{Habit, HabitRepository};
use habitrack_domain::schedule::format_calendar_date;
use habitrack_domain::session::AuthContext;
use habitrack_domain::shared::{Clock, DomainError};
use habitrack_domain::streak::{StreakRepository, StreakState};

const TOP_LIMIT: usize = 5;
const UNKNOWN_HABIT: &str = "Unknown";

/// Weekly analytics for the dashboard
pub struct AnalyticsQueryService {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    streak_repo: Arc<dyn StreakRepository>,
    clock: Arc<dyn Clock>,
}

impl AnalyticsQueryService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
        streak_repo: Arc<dyn StreakRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            streak_repo,
            clock,
        }
    }

    /// Statistics for the Sunday..Saturday week containing today
    pub async fn get_weekly_analytics(
        &self,
        auth: &AuthContext,
    ) -> Result<WeeklyAnalyticsDto, DomainError> {
        let today = self.clock.today();
        let (week_start, week_end) = week_bounds(today);

        let habits = self.habit_repo.list_active_by_owner(&auth.user_id).await?;
        let entries = self
            .completion_repo
            .list_by_owner_in_range(&auth.user_id, week_start, week_end)
            .await?;
        let streaks = self.streak_repo.list_by_owner(&auth.user_id).await?;

        debug!(
            "[analytics] user {}: {} habits, {} entries in week of {}",
            auth.user_id,
            habits.len(),
            entries.len(),
            week_start
        );

        Ok(build_weekly_analytics(&habits, &entries, &streaks, today))
    }
}

/// Sunday on or before `today`, and the Saturday after it
fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    (start, start + Duration::days(6))
}

/// `habits` are the active habits; `entries` cover the week only.
fn build_weekly_analytics(
    habits: &[Habit],
    entries: &[CompletionEntry],
    streaks: &[StreakState],
    today: NaiveDate,
) -> WeeklyAnalyticsDto {
    let (week_start, week_end) = week_bounds(today);

    let mut completed_per_habit: HashMap<&str, u32> = HashMap::new();
    for entry in entries {
        *completed_per_habit.entry(entry.habit_id().as_str()).or_default() += 1;
    }

    let statistics = WeeklyStatisticsDto {
        total_habits: habits.len() as u32,
        completed_today: entries.iter().filter(|e| e.date() == today).count() as u32,
        this_week_completions: entries.len() as u32,
        longest_streak: streaks.iter().map(|s| s.longest_streak()).max().unwrap_or(0),
        total_streak: streaks.iter().map(|s| s.current_streak()).max().unwrap_or(0),
    };

    let habit_performance: Vec<HabitPerformanceDto> = habits
        .iter()
        .map(|habit| HabitPerformanceDto {
            habit_id: habit.id().to_string(),
            name: habit.name().to_string(),
            frequency: habit.frequency().to_string(),
            completed_days: completed_per_habit
                .get(habit.id().as_str())
                .copied()
                .unwrap_or(0),
            max_days: habit.max_completions_per_week(),
        })
        .collect();

    let mut top_habits = habit_performance.clone();
    top_habits.sort_by(|a, b| b.completed_days.cmp(&a.completed_days));
    top_habits.truncate(TOP_LIMIT);

    let names: HashMap<&str, &str> = habits
        .iter()
        .map(|h| (h.id().as_str(), h.name()))
        .collect();

    let mut active_streaks: Vec<&StreakState> =
        streaks.iter().filter(|s| s.current_streak() > 0).collect();
    active_streaks.sort_by(|a, b| b.current_streak().cmp(&a.current_streak()));

    let streak_data = active_streaks
        .into_iter()
        .take(TOP_LIMIT)
        .map(|streak| StreakHighlightDto {
            habit_id: streak.habit_id().to_string(),
            habit_name: names
                .get(streak.habit_id().as_str())
                .copied()
                .unwrap_or(UNKNOWN_HABIT)
                .to_string(),
            current_streak: streak.current_streak(),
            longest_streak: streak.longest_streak(),
        })
        .collect();

    WeeklyAnalyticsDto {
        week_start: format_calendar_date(week_start),
        week_end: format_calendar_date(week_end),
        statistics,
        habit_performance,
        top_habits,
        streak_data,
    }
}
