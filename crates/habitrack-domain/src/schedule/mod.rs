mod calendar;
mod weekday;


pub use calendar::{
    completion_status, format_calendar_date, next_scheduled_weekday, parse_calendar_date,
    weekday_of, CompletionStatus, NextScheduledDay, DATE_FORMAT,
};
pub use weekday::{normalize_weekday_name, Weekday, WEEKDAY_CODES};
