use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::weekday::{long_day_label, normalize_weekday_name, Weekday, WEEKDAY_CODES};
use crate::shared::DomainError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Weekday of a calendar date.
///
/// Works on the date's own fields, so the answer never depends on a local
/// clock or timezone offset.
pub fn weekday_of(date: NaiveDate) -> Weekday {
    Weekday::ALL[date.weekday().num_days_from_sunday() as usize]
}

/// Strict `YYYY-MM-DD` parser.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, DomainError> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(DomainError::InvalidDateFormat(format!(
            "Use YYYY-MM-DD (got '{}')",
            input
        )));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        DomainError::InvalidDateFormat(format!("Use YYYY-MM-DD (no such day '{}')", input))
    })
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextScheduledDay {
    pub day: String,
    pub days_until: u32,
}

/// First scheduled day in the 7 days starting at `from` (inclusive).
///
/// If nothing in the window matches (only possible for malformed day names),
/// falls back to the first configured entry. Returns `None` for an empty
/// schedule.
pub fn next_scheduled_weekday<D: AsRef<str>>(
    scheduled_days: &[D],
    from: NaiveDate,
) -> Option<NextScheduledDay> {
    let normalized: Vec<String> = scheduled_days
        .iter()
        .map(|d| normalize_weekday_name(d.as_ref()))
        .collect();
    let first = normalized.first()?.clone();

    let start = weekday_of(from).sunday_index();
    for offset in 0..7 {
        let code = WEEKDAY_CODES[(start + offset) % 7];
        if normalized.iter().any(|d| d == code) {
            return Some(NextScheduledDay {
                day: code.to_string(),
                days_until: offset as u32,
            });
        }
    }

    let days_until = WEEKDAY_CODES
        .iter()
        .position(|code| *code == first)
        .unwrap_or(0) as u32;

    Some(NextScheduledDay {
        day: first,
        days_until,
    })
}

/// Three-state view of a habit for "today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum CompletionStatus {
    CompletedToday,
    CompleteNow,
    CompleteLater { next_day: Option<String> },
}

impl CompletionStatus {
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionStatus::CompletedToday => "completed-today",
            CompletionStatus::CompleteNow => "complete-now",
            CompletionStatus::CompleteLater { .. } => "complete-later",
        }
    }

    pub fn label(&self) -> String {
        match self {
            CompletionStatus::CompletedToday => "Task has been completed".to_string(),
            CompletionStatus::CompleteNow => "Complete now".to_string(),
            CompletionStatus::CompleteLater { next_day: None } => "Not scheduled".to_string(),
            CompletionStatus::CompleteLater {
                next_day: Some(day),
            } => format!("Complete on {}", long_day_label(day)),
        }
    }
}

pub fn completion_status<D: AsRef<str>>(
    scheduled_days: &[D],
    is_completed_today: bool,
    today: NaiveDate,
) -> CompletionStatus {
    if scheduled_days.is_empty() {
        return CompletionStatus::CompleteLater { next_day: None };
    }

    if is_completed_today {
        return CompletionStatus::CompletedToday;
    }

    let today_code = weekday_of(today).code();
    let scheduled_today = scheduled_days
        .iter()
        .any(|d| normalize_weekday_name(d.as_ref()) == today_code);

    if scheduled_today {
        return CompletionStatus::CompleteNow;
    }

    CompletionStatus::CompleteLater {
        next_day: next_scheduled_weekday(scheduled_days, today).map(|next| next.day),
    }
}
