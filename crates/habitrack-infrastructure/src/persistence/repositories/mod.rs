pub mod completion_repo;
pub mod habit_repo;
pub mod session_repo;
pub mod streak_repo;
pub mod user_repo;

pub use completion_repo::SqliteCompletionRepository;
pub use habit_repo::SqliteHabitRepository;
pub use session_repo::SqliteSessionRepository;
pub use streak_repo::SqliteStreakRepository;
pub use user_repo::SqliteUserRepository;
