use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schedule::{weekday_of, Weekday};
use crate::shared::{DomainError, HabitId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Custom,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Custom => "custom",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "custom" => Ok(Frequency::Custom),
            other => Err(DomainError::Validation(format!(
                "Frequency must be one of daily, weekly, custom (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    owner_id: UserId,
    name: String,
    description: Option<String>,
    frequency: Frequency,
    scheduled_days: Vec<Weekday>,
    reminder_time: NaiveTime,
    archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Habit {
    pub const MAX_NAME_LEN: usize = 80;
    pub const MAX_DESCRIPTION_LEN: usize = 300;
    pub const REMINDER_TIME_FORMAT: &'static str = "%H:%M";

    pub fn new(
        owner_id: UserId,
        name: String,
        description: Option<String>,
        frequency: Frequency,
        days: &[String],
        reminder_time: &str,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();

        Ok(Self {
            id: HabitId::new(),
            owner_id,
            name: validate_name(&name)?,
            description: validate_description(description)?,
            frequency,
            scheduled_days: resolve_scheduled_days(frequency, days)?,
            reminder_time: parse_reminder_time(reminder_time)?,
            archived: false,
            created_at: now,
            updated_at: now,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        owner_id: UserId,
        name: String,
        description: Option<String>,
        frequency: Frequency,
        scheduled_days: Vec<Weekday>,
        reminder_time: NaiveTime,
        archived: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            description,
            frequency,
            scheduled_days,
            reminder_time,
            archived,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn scheduled_days(&self) -> &[Weekday] {
        &self.scheduled_days
    }

    pub fn reminder_time(&self) -> NaiveTime {
        self.reminder_time
    }

    pub fn reminder_time_label(&self) -> String {
        self.reminder_time
            .format(Self::REMINDER_TIME_FORMAT)
            .to_string()
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether a completion on `date` is allowed by the recurrence rule.
    pub fn is_scheduled(&self, date: NaiveDate) -> bool {
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Weekly | Frequency::Custom => {
                self.scheduled_days.contains(&weekday_of(date))
            }
        }
    }

    /// Upper bound of completions in one Sunday..Saturday week.
    pub fn max_completions_per_week(&self) -> u32 {
        match self.frequency {
            Frequency::Daily => 7,
            Frequency::Weekly => 1,
            Frequency::Custom => self.scheduled_days.len() as u32,
        }
    }

    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        self.name = validate_name(&name)?;
        self.touch();
        Ok(())
    }

    pub fn update_description(&mut self, description: Option<String>) -> Result<(), DomainError> {
        self.description = validate_description(description)?;
        self.touch();
        Ok(())
    }

    pub fn reschedule(&mut self, frequency: Frequency, days: &[String]) -> Result<(), DomainError> {
        self.scheduled_days = resolve_scheduled_days(frequency, days)?;
        self.frequency = frequency;
        self.touch();
        Ok(())
    }

    pub fn update_reminder_time(&mut self, reminder_time: &str) -> Result<(), DomainError> {
        self.reminder_time = parse_reminder_time(reminder_time)?;
        self.touch();
        Ok(())
    }

    pub fn set_archived(&mut self, archived: bool) {
        self.archived = archived;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Habit name cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > Habit::MAX_NAME_LEN {
        return Err(DomainError::Validation(format!(
            "Habit name must be {} characters or less",
            Habit::MAX_NAME_LEN
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_description(description: Option<String>) -> Result<Option<String>, DomainError> {
    let Some(description) = description else {
        return Ok(None);
    };

    let trimmed = description.trim();
    if trimmed.chars().count() > Habit::MAX_DESCRIPTION_LEN {
        return Err(DomainError::Validation(format!(
            "Description must be {} characters or less",
            Habit::MAX_DESCRIPTION_LEN
        )));
    }

    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Daily habits always run every day; other frequencies need at least one
/// recognizable weekday. Duplicates collapse, first occurrence wins.
fn resolve_scheduled_days(
    frequency: Frequency,
    days: &[String],
) -> Result<Vec<Weekday>, DomainError> {
    if frequency == Frequency::Daily {
        return Ok(Weekday::ALL.to_vec());
    }

    let mut resolved = Vec::with_capacity(days.len());
    for day in days {
        let weekday: Weekday = day.parse()?;
        if !resolved.contains(&weekday) {
            resolved.push(weekday);
        }
    }

    if resolved.is_empty() {
        return Err(DomainError::Validation("Days cannot be empty".to_string()));
    }

    Ok(resolved)
}

fn parse_reminder_time(input: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(input.trim(), Habit::REMINDER_TIME_FORMAT).map_err(|_| {
        DomainError::Validation(format!("Reminder time must be HH:MM (got '{}')", input))
    })
}
