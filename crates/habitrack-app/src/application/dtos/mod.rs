mod analytics_dto;
mod habit_dto;
mod user_dto;

pub use analytics_dto::*;
pub use habit_dto::*;
pub use user_dto::*;
