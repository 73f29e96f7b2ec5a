mod analytics_queries;
mod habit_queries;
mod user_queries;

pub use analytics_queries::AnalyticsQueryService;
pub use habit_queries::HabitQueryService;
pub use user_queries::UserQueryService;
