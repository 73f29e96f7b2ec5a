use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Source of "now" for the engine.
///
/// `today()` is the UTC calendar day, matching how completion dates are
/// compared against the reference day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn yesterday(&self) -> NaiveDate {
        self.today() - Duration::days(1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Noon UTC on the given day.
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(12);
        Self { now: noon }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today_and_yesterday() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let clock = FixedClock::on(day);

        assert_eq!(clock.today(), day);
        assert_eq!(clock.yesterday(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
