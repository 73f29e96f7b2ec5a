use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Canonical 3-letter codes, Sunday first.
pub const WEEKDAY_CODES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    pub fn from_sunday_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn sunday_index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        WEEKDAY_CODES[self.sunday_index()]
    }

    pub fn long_name(self) -> &'static str {
        WEEKDAY_NAMES[self.sunday_index()]
    }

    /// Accepts long or short names in any case.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = normalize_weekday_name(input);
        WEEKDAY_CODES
            .iter()
            .position(|code| *code == normalized)
            .and_then(Self::from_sunday_index)
    }
}

impl AsRef<str> for Weekday {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::Validation(format!("Unknown weekday: {}", s)))
    }
}

/// Map "Monday", "monday", "MON", " mon " ... to "Mon".
///
/// Unrecognized input is returned unchanged.
pub fn normalize_weekday_name(input: &str) -> String {
    let lower = input.trim().to_lowercase();

    let index = WEEKDAY_NAMES
        .iter()
        .position(|name| name.to_lowercase() == lower)
        .or_else(|| {
            WEEKDAY_CODES
                .iter()
                .position(|code| code.to_lowercase() == lower)
        });

    match index {
        Some(i) => WEEKDAY_CODES[i].to_string(),
        None => input.to_string(),
    }
}

/// Long display name for a day code, falling back to the input itself.
pub(crate) fn long_day_label(day: &str) -> String {
    match WEEKDAY_CODES.iter().position(|code| *code == day) {
        Some(i) => WEEKDAY_NAMES[i].to_string(),
        None if day.is_empty() => "future".to_string(),
        None => day.to_string(),
    }
}
