mod test_helpers;

use habitrack_app::presentation::HabitChanges;
use test_helpers::{app_on, new_habit, register};

// 2024-01-10 is a Wednesday
const TODAY: &str = "2024-01-10";

#[tokio::test]
async fn test_complete_habit_end_to_end() {
    let app = app_on(TODAY).await;
    let token = register(&app, "runner@example.com").await;

    let habit = app
        .create_habit(&token, new_habit("Run", "daily", &[]))
        .await
        .unwrap();

    let (entry, streak) = app
        .complete_habit(&token, &habit.id, TODAY, Some("5k".to_string()), Some(2))
        .await
        .unwrap();

    assert_eq!(entry.date, TODAY);
    assert_eq!(entry.count, 2);
    assert_eq!(entry.note.as_deref(), Some("5k"));
    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 1);

    let detail = app.get_habit(&token, &habit.id).await.unwrap();
    assert_eq!(detail.entries.len(), 1);
    assert_eq!(detail.streak.last_completed_date.as_deref(), Some(TODAY));

    let found = app.get_entry(&token, &habit.id, TODAY).await.unwrap();
    assert_eq!(found.map(|e| e.id), Some(entry.id));
    let none = app.get_entry(&token, &habit.id, "2024-01-09").await.unwrap();
    assert!(none.is_none());

    assert!(app.runtime.activity_log.recorded() >= 3);
}

#[tokio::test]
async fn test_completion_errors_are_mapped() {
    let app = app_on(TODAY).await;
    let token = register(&app, "errors@example.com").await;

    let weekly = app
        .create_habit(&token, new_habit("Review", "weekly", &["Mon"]))
        .await
        .unwrap();

    let bad_date = app
        .complete_habit(&token, &weekly.id, "2024/01/08", None, None)
        .await
        .unwrap_err();
    assert_eq!(bad_date.status, 400);
    assert!(bad_date.message.contains("Use YYYY-MM-DD"));

    let not_scheduled = app
        .complete_habit(&token, &weekly.id, TODAY, None, None)
        .await
        .unwrap_err();
    assert_eq!(not_scheduled.status, 422);
    assert_eq!(not_scheduled.message, "This habit is not scheduled for Wed");

    app.complete_habit(&token, &weekly.id, "2024-01-08", None, None)
        .await
        .unwrap();
    let duplicate = app
        .complete_habit(&token, &weekly.id, "2024-01-08", None, None)
        .await
        .unwrap_err();
    assert_eq!(duplicate.status, 409);

    let missing = app
        .complete_habit(&token, "no-such-habit", "2024-01-08", None, None)
        .await
        .unwrap_err();
    assert_eq!(missing.status, 404);

    let unauthenticated = app
        .complete_habit("bogus-token", &weekly.id, "2024-01-08", None, None)
        .await
        .unwrap_err();
    assert_eq!(unauthenticated.status, 401);
}

#[tokio::test]
async fn test_habits_are_private_to_their_owner() {
    let app = app_on(TODAY).await;
    let alice = register(&app, "alice@example.com").await;
    let bob = register(&app, "bob@example.com").await;

    let habit = app
        .create_habit(&alice, new_habit("Journal", "daily", &[]))
        .await
        .unwrap();

    assert!(app.list_habits(&bob).await.unwrap().is_empty());
    assert_eq!(app.get_habit(&bob, &habit.id).await.unwrap_err().status, 404);
    assert_eq!(
        app.complete_habit(&bob, &habit.id, TODAY, None, None)
            .await
            .unwrap_err()
            .status,
        404
    );
    assert_eq!(app.delete_habit(&bob, &habit.id).await.unwrap_err().status, 404);
    assert_eq!(app.list_habits(&alice).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_habits_with_status() {
    let app = app_on(TODAY).await;
    let token = register(&app, "list@example.com").await;

    let friday = app
        .create_habit(&token, new_habit("Swim", "custom", &["Fri"]))
        .await
        .unwrap();
    let daily = app
        .create_habit(&token, new_habit("Stretch", "daily", &[]))
        .await
        .unwrap();
    app.complete_habit(&token, &daily.id, TODAY, None, None)
        .await
        .unwrap();

    let list = app.list_habits(&token).await.unwrap();
    assert_eq!(list.len(), 2);

    // Newest first
    assert_eq!(list[0].habit.id, daily.id);
    assert_eq!(list[0].status.kind, "completed-today");
    assert_eq!(list[0].streak.current_streak, 1);

    assert_eq!(list[1].habit.id, friday.id);
    assert_eq!(list[1].status.label, "Complete on Friday");
    assert_eq!(list[1].streak.current_streak, 0);
    assert_eq!(list[1].streak.last_completed_date, None);
}

#[tokio::test]
async fn test_update_archive_and_delete_habit() {
    let app = app_on(TODAY).await;
    let token = register(&app, "manage@example.com").await;

    let habit = app
        .create_habit(&token, new_habit("Guitar", "weekly", &["Sat"]))
        .await
        .unwrap();

    let updated = app
        .update_habit(
            &token,
            &habit.id,
            HabitChanges {
                days: Some(vec!["Wed".to_string(), "Sat".to_string()]),
                reminder_time: Some("19:45".to_string()),
                ..HabitChanges::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.days, vec!["Wed", "Sat"]);
    assert_eq!(updated.reminder_time, "19:45");

    app.complete_habit(&token, &habit.id, TODAY, None, None)
        .await
        .unwrap();

    assert!(app.toggle_archive_habit(&token, &habit.id).await.unwrap());
    let analytics = app.weekly_analytics(&token).await.unwrap();
    assert_eq!(analytics.statistics.total_habits, 0);

    assert!(!app.toggle_archive_habit(&token, &habit.id).await.unwrap());
    assert!(app.delete_habit(&token, &habit.id).await.unwrap());
    assert_eq!(app.get_habit(&token, &habit.id).await.unwrap_err().status, 404);

    let entries = app
        .repositories
        .completion
        .list_by_owner_in_range(
            &app.services.auth.authenticate(&token).await.unwrap().user_id,
            test_helpers::date("2024-01-01"),
            test_helpers::date("2024-01-31"),
        )
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_weekly_analytics() {
    let app = app_on(TODAY).await;
    let token = register(&app, "stats@example.com").await;

    let read = app
        .create_habit(&token, new_habit("Read", "daily", &[]))
        .await
        .unwrap();
    let gym = app
        .create_habit(&token, new_habit("Gym", "custom", &["Mon", "Wed", "Fri"]))
        .await
        .unwrap();

    for day in ["2024-01-08", "2024-01-09", TODAY] {
        app.complete_habit(&token, &read.id, day, None, None)
            .await
            .unwrap();
    }
    app.complete_habit(&token, &gym.id, "2024-01-08", None, None)
        .await
        .unwrap();
    // Previous week, outside the window
    app.complete_habit(&token, &read.id, "2024-01-05", None, None)
        .await
        .unwrap();

    let analytics = app.weekly_analytics(&token).await.unwrap();

    assert_eq!(analytics.week_start, "2024-01-07");
    assert_eq!(analytics.week_end, "2024-01-13");
    assert_eq!(analytics.statistics.total_habits, 2);
    assert_eq!(analytics.statistics.completed_today, 1);
    assert_eq!(analytics.statistics.this_week_completions, 4);
    assert_eq!(analytics.top_habits[0].name, "Read");
    assert_eq!(analytics.top_habits[0].completed_days, 3);
    assert_eq!(analytics.top_habits[1].max_days, 3);
    assert!(analytics.streak_data.iter().all(|s| s.current_streak > 0));
}
