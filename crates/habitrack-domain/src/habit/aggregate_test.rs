#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::schedule::{weekday_of, Weekday};
    use crate::shared::{DomainError, UserId};
    use chrono::{Duration, NaiveDate, NaiveTime};

    fn days(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    fn create_habit(frequency: Frequency, list: &[&str]) -> Habit {
        Habit::new(
            UserId::new(),
            "Read".to_string(),
            None,
            frequency,
            &days(list),
            "07:30",
        )
        .unwrap()
    }

    fn week_from(start: NaiveDate) -> Vec<NaiveDate> {
        (0..7).map(|i| start + Duration::days(i)).collect()
    }

    #[test]
    fn test_create_habit_trims_and_defaults() {
        let habit = Habit::new(
            UserId::new(),
            "  Morning run  ".to_string(),
            Some("   ".to_string()),
            Frequency::Custom,
            &days(&["monday", "Wed"]),
            "06:15",
        )
        .unwrap();

        assert_eq!(habit.name(), "Morning run");
        assert_eq!(habit.description(), None);
        assert_eq!(habit.scheduled_days(), &[Weekday::Mon, Weekday::Wed]);
        assert_eq!(habit.reminder_time(), NaiveTime::from_hms_opt(6, 15, 0).unwrap());
        assert_eq!(habit.reminder_time_label(), "06:15");
        assert!(!habit.is_archived());
    }

    #[test]
    fn test_daily_habit_always_has_all_days() {
        let habit = create_habit(Frequency::Daily, &["Mon"]);
        assert_eq!(habit.scheduled_days(), &Weekday::ALL);

        let habit = create_habit(Frequency::Daily, &[]);
        assert_eq!(habit.scheduled_days().len(), 7);
    }

    #[test]
    fn test_duplicate_days_collapse_in_order() {
        let habit = create_habit(Frequency::Custom, &["Fri", "friday", "Mon", "FRI"]);
        assert_eq!(habit.scheduled_days(), &[Weekday::Fri, Weekday::Mon]);
    }

    #[test]
    fn test_non_daily_habit_requires_days() {
        let result = Habit::new(
            UserId::new(),
            "Read".to_string(),
            None,
            Frequency::Weekly,
            &[],
            "07:30",
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_unknown_weekday_is_rejected() {
        let result = Habit::new(
            UserId::new(),
            "Read".to_string(),
            None,
            Frequency::Custom,
            &days(&["Mon", "Someday"]),
            "07:30",
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_name_and_description_limits() {
        let long_name = "x".repeat(Habit::MAX_NAME_LEN + 1);
        let result = Habit::new(
            UserId::new(),
            long_name,
            None,
            Frequency::Daily,
            &[],
            "07:30",
        );
        assert!(result.is_err());

        let empty = Habit::new(
            UserId::new(),
            "   ".to_string(),
            None,
            Frequency::Daily,
            &[],
            "07:30",
        );
        assert!(empty.is_err());

        let long_description = "y".repeat(Habit::MAX_DESCRIPTION_LEN + 1);
        let result = Habit::new(
            UserId::new(),
            "Read".to_string(),
            Some(long_description),
            Frequency::Daily,
            &[],
            "07:30",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_reminder_time_must_be_hh_mm() {
        for bad in ["7", "25:00", "07:60", "seven"] {
            let result = Habit::new(
                UserId::new(),
                "Read".to_string(),
                None,
                Frequency::Daily,
                &[],
                bad,
            );
            assert!(result.is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_daily_is_scheduled_every_weekday() {
        let habit = create_habit(Frequency::Daily, &[]);
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

        for date in week_from(sunday) {
            assert!(habit.is_scheduled(date), "{} should be scheduled", date);
        }
    }

    #[test]
    fn test_weekly_and_custom_scheduled_iff_weekday_listed() {
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

        for frequency in [Frequency::Weekly, Frequency::Custom] {
            let habit = create_habit(frequency, &["Tue", "Sat"]);
            for date in week_from(sunday) {
                let expected = matches!(weekday_of(date), Weekday::Tue | Weekday::Sat);
                assert_eq!(habit.is_scheduled(date), expected, "{} {}", frequency, date);
            }
        }
    }

    #[test]
    fn test_max_completions_per_week() {
        assert_eq!(create_habit(Frequency::Daily, &[]).max_completions_per_week(), 7);
        assert_eq!(
            create_habit(Frequency::Weekly, &["Mon", "Tue"]).max_completions_per_week(),
            1
        );
        assert_eq!(
            create_habit(Frequency::Custom, &["Mon", "Tue", "Fri"]).max_completions_per_week(),
            3
        );
    }

    #[test]
    fn test_reschedule_revalidates() {
        let mut habit = create_habit(Frequency::Daily, &[]);

        habit
            .reschedule(Frequency::Custom, &days(&["Thu"]))
            .unwrap();
        assert_eq!(habit.frequency(), Frequency::Custom);
        assert_eq!(habit.scheduled_days(), &[Weekday::Thu]);

        let err = habit.reschedule(Frequency::Weekly, &[]);
        assert!(err.is_err());
        // Failed update leaves the previous schedule in place
        assert_eq!(habit.frequency(), Frequency::Custom);
        assert_eq!(habit.scheduled_days(), &[Weekday::Thu]);
    }

    #[test]
    fn test_archive_toggle() {
        let mut habit = create_habit(Frequency::Daily, &[]);
        habit.set_archived(true);
        assert!(habit.is_archived());
        habit.set_archived(false);
        assert!(!habit.is_archived());
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!("Daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!(" custom ".parse::<Frequency>().unwrap(), Frequency::Custom);
        assert!("monthly".parse::<Frequency>().is_err());
        assert_eq!(Frequency::Custom.to_string(), "custom");
    }
}
