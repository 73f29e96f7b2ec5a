#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::{HabitId, UserId};
    use chrono::{Duration, NaiveDate};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ids() -> (HabitId, UserId) {
        (HabitId::new(), UserId::new())
    }

    #[test]
    fn test_first_completion_starts_at_one() {
        let (habit_id, owner_id) = ids();

        // Any date, relative to any "today"
        for (completed, today) in [
            ("2024-01-01", "2024-01-01"),
            ("2023-06-15", "2024-01-01"),
            ("2024-02-01", "2024-01-01"),
        ] {
            let streak = record_completion(None, &habit_id, &owner_id, date(completed), date(today));
            assert_eq!(streak.current_streak(), 1);
            assert_eq!(streak.longest_streak(), 1);
            assert_eq!(streak.last_completed_date(), Some(date(completed)));
            assert_eq!(streak.version(), 0);
        }
    }

    #[test]
    fn test_completing_today_twice_increments_twice() {
        let (habit_id, owner_id) = ids();
        let today = date("2024-05-10");

        let first = record_completion(None, &habit_id, &owner_id, today, today);
        let second = record_completion(Some(&first), &habit_id, &owner_id, today, today);

        assert_eq!(second.current_streak(), 2);
        assert_eq!(second.longest_streak(), 2);
    }

    #[test]
    fn test_completing_today_increments_even_after_gap() {
        let (habit_id, owner_id) = ids();
        let previous = StreakState::restore(
            habit_id.clone(),
            owner_id.clone(),
            4,
            6,
            Some(date("2024-04-01")),
            3,
        );
        let today = date("2024-05-10");

        let next = record_completion(Some(&previous), &habit_id, &owner_id, today, today);

        assert_eq!(next.current_streak(), 5);
        assert_eq!(next.longest_streak(), 6);
        assert_eq!(next.last_completed_date(), Some(today));
    }

    #[test]
    fn test_yesterday_after_yesterday_increments() {
        let (habit_id, owner_id) = ids();
        let today = date("2024-05-10");
        let yesterday = today - Duration::days(1);
        let previous =
            StreakState::restore(habit_id.clone(), owner_id.clone(), 3, 3, Some(yesterday), 1);

        let next = record_completion(Some(&previous), &habit_id, &owner_id, yesterday, today);

        assert_eq!(next.current_streak(), 4);
        assert_eq!(next.longest_streak(), 4);
    }

    #[test]
    fn test_yesterday_without_prior_yesterday_resets() {
        let (habit_id, owner_id) = ids();
        let today = date("2024-05-10");
        let yesterday = today - Duration::days(1);
        let previous = StreakState::restore(
            habit_id.clone(),
            owner_id.clone(),
            3,
            5,
            Some(date("2024-05-05")),
            1,
        );

        let next = record_completion(Some(&previous), &habit_id, &owner_id, yesterday, today);

        assert_eq!(next.current_streak(), 1);
        assert_eq!(next.longest_streak(), 5);
        assert_eq!(next.last_completed_date(), Some(yesterday));
    }

    #[test]
    fn test_consecutive_days_as_today() {
        let (habit_id, owner_id) = ids();
        let monday = date("2024-01-01");
        let tuesday = date("2024-01-02");

        let first = record_completion(None, &habit_id, &owner_id, monday, monday);
        let second = record_completion(Some(&first), &habit_id, &owner_id, tuesday, tuesday);

        assert_eq!(second.current_streak(), first.current_streak() + 1);
    }

    #[test]
    fn test_backfilled_older_date_resets() {
        let (habit_id, owner_id) = ids();
        let previous = StreakState::restore(
            habit_id.clone(),
            owner_id.clone(),
            7,
            7,
            Some(date("2024-05-09")),
            2,
        );

        let next = record_completion(
            Some(&previous),
            &habit_id,
            &owner_id,
            date("2024-05-01"),
            date("2024-05-10"),
        );

        assert_eq!(next.current_streak(), 1);
        assert_eq!(next.longest_streak(), 7);
        assert_eq!(next.last_completed_date(), Some(date("2024-05-01")));
    }

    #[test]
    fn test_reference_sequence() {
        let (habit_id, owner_id) = ids();

        // 2024-01-01 completed on 2024-01-01
        let s1 = record_completion(
            None,
            &habit_id,
            &owner_id,
            date("2024-01-01"),
            date("2024-01-01"),
        );
        assert_eq!((s1.current_streak(), s1.longest_streak()), (1, 1));

        // Next day, completed on the day
        let s2 = record_completion(
            Some(&s1),
            &habit_id,
            &owner_id,
            date("2024-01-02"),
            date("2024-01-02"),
        );
        assert_eq!((s2.current_streak(), s2.longest_streak()), (2, 2));

        // 2024-01-10 logged after a gap, when it is neither today nor yesterday
        let s3 = record_completion(
            Some(&s2),
            &habit_id,
            &owner_id,
            date("2024-01-10"),
            date("2024-01-12"),
        );
        assert_eq!((s3.current_streak(), s3.longest_streak()), (1, 2));
    }

    #[test]
    fn test_longest_streak_never_decreases() {
        let (habit_id, owner_id) = ids();
        let start = date("2024-03-01");

        // (offset of completed date, offset of today) pairs mixing every branch
        let steps: [(i64, i64); 12] = [
            (0, 0),
            (1, 1),
            (2, 2),
            (2, 3),
            (9, 9),
            (3, 20),
            (20, 20),
            (21, 21),
            (21, 22),
            (22, 22),
            (23, 23),
            (40, 45),
        ];

        let mut state: Option<StreakState> = None;
        let mut last_longest = 0;

        for (completed, today) in steps {
            let next = record_completion(
                state.as_ref(),
                &habit_id,
                &owner_id,
                start + Duration::days(completed),
                start + Duration::days(today),
            );

            assert!(next.current_streak() >= 1);
            assert!(next.longest_streak() >= next.current_streak());
            assert!(next.longest_streak() >= last_longest);

            last_longest = next.longest_streak();
            state = Some(next);
        }

        assert_eq!(last_longest, 6);
    }

    #[test]
    fn test_previous_version_is_carried_forward() {
        let (habit_id, owner_id) = ids();
        let today = date("2024-05-10");
        let previous = StreakState::restore(habit_id.clone(), owner_id.clone(), 1, 1, None, 9);

        let next = record_completion(Some(&previous), &habit_id, &owner_id, today, today);
        assert_eq!(next.version(), 9);
        assert_eq!(next.with_version(10).version(), 10);
    }

    #[test]
    fn test_restore_keeps_longest_at_least_current() {
        let streak = StreakState::restore(HabitId::new(), UserId::new(), 5, 2, None, 1);
        assert_eq!(streak.longest_streak(), 5);
    }

    #[test]
    fn test_empty_streak() {
        let streak = StreakState::empty(HabitId::new(), UserId::new());
        assert_eq!(streak.current_streak(), 0);
        assert_eq!(streak.longest_streak(), 0);
        assert_eq!(streak.last_completed_date(), None);
        assert!(!streak.is_persisted());
    }
}
