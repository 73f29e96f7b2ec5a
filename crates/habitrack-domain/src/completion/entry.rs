use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, EntryId, HabitId, UserId};

/// A habit performed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    id: EntryId,
    habit_id: HabitId,
    owner_id: UserId,
    date: NaiveDate,
    count: u32,
    note: Option<String>,
}

impl CompletionEntry {
    pub const MIN_COUNT: u32 = 1;
    pub const MAX_COUNT: u32 = 50;
    pub const MAX_NOTE_LEN: usize = 500;

    pub fn new(
        habit_id: HabitId,
        owner_id: UserId,
        date: NaiveDate,
        count: Option<u32>,
        note: Option<String>,
    ) -> Result<Self, DomainError> {
        let count = count.unwrap_or(Self::MIN_COUNT);
        if !(Self::MIN_COUNT..=Self::MAX_COUNT).contains(&count) {
            return Err(DomainError::Validation(format!(
                "Count must be between {} and {}",
                Self::MIN_COUNT,
                Self::MAX_COUNT
            )));
        }

        let note = match note {
            Some(note) => {
                let trimmed = note.trim();
                if trimmed.chars().count() > Self::MAX_NOTE_LEN {
                    return Err(DomainError::Validation(format!(
                        "Note must be {} characters or less",
                        Self::MAX_NOTE_LEN
                    )));
                }
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            None => None,
        };

        Ok(Self {
            id: EntryId::new(),
            habit_id,
            owner_id,
            date,
            count,
            note,
        })
    }

    pub fn restore(
        id: EntryId,
        habit_id: HabitId,
        owner_id: UserId,
        date: NaiveDate,
        count: u32,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            habit_id,
            owner_id,
            date,
            count,
            note,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
