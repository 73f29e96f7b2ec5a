use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStatisticsDto {
    pub total_habits: u32,
    pub completed_today: u32,
    pub this_week_completions: u32,
    pub longest_streak: u32,
    /// Best current streak across habits
    pub total_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitPerformanceDto {
    pub habit_id: String,
    pub name: String,
    pub frequency: String,
    pub completed_days: u32,
    pub max_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakHighlightDto {
    pub habit_id: String,
    pub habit_name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAnalyticsDto {
    pub week_start: String, // Sunday, YYYY-MM-DD
    pub week_end: String,   // Saturday
    pub statistics: WeeklyStatisticsDto,
    pub habit_performance: Vec<HabitPerformanceDto>,
    pub top_habits: Vec<HabitPerformanceDto>,
    pub streak_data: Vec<StreakHighlightDto>,
}
