use habitrack_infrastructure::persistence::Database;

#[tokio::test]
async fn database_creates_file_and_migrates_integration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("nested").join("habitrack.db");
    let db_path = db_path.to_str().expect("utf-8 path").to_string();

    let db = Database::new(&db_path, 2).await.expect("open db");
    db.run_migrations().await.expect("first migration run");
    // already applied migrations are skipped
    db.run_migrations().await.expect("second migration run");

    assert!(std::path::Path::new(&db_path).exists());

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' ORDER BY name",
    )
    .fetch_all(db.pool())
    .await
    .expect("list tables");

    for expected in ["completion_entries", "habits", "sessions", "streaks", "users"] {
        assert!(tables.iter().any(|t| t == expected), "missing table {}", expected);
    }

    let foreign_keys: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(db.pool())
        .await
        .expect("pragma");
    assert_eq!(foreign_keys, 1);
}
