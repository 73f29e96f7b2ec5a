use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::Frequency;
use crate::shared::{HabitId, UserId};

/// Event fired when a user account is registered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistered {
    pub user_id: UserId,
    pub email: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(UserRegistered);

/// Event fired when a habit is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCreated {
    pub habit_id: HabitId,
    pub owner_id: UserId,
    pub name: String,
    pub frequency: Frequency,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitCreated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitUpdated {
    pub habit_id: HabitId,
    pub owner_id: UserId,
    pub schedule_changed: bool,
    pub archived: bool,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitUpdated);

/// Event fired after a habit and its history were deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDeleted {
    pub habit_id: HabitId,
    pub owner_id: UserId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitDeleted);

/// Event fired once a completion and its streak were stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCompleted {
    pub habit_id: HabitId,
    pub owner_id: UserId,
    pub date: NaiveDate,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitCompleted);
