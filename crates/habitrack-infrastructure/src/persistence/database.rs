use habitrack_domain::shared::DomainError;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::fs::OpenOptions;
use std::path::Path;

use super::ResultExt;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(db_path: &str, max_connections: u32) -> Result<Self, DomainError> {
        let path = Path::new(db_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainError::Infrastructure(format!("Failed to create DB directory: {}", e))
            })?;
        }

        if !path.exists() {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(false)
                .open(path)
                .map_err(|e| {
                    DomainError::Infrastructure(format!("Failed to create DB file: {}", e))
                })?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect(&format!("sqlite:{}", db_path))
            .await
            .to_infra_err()?;

        log::info!("[db] opened {} (max_connections={})", db_path, max_connections);

        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Pinned to a single connection that never expires, since every new
    /// `:memory:` connection would see an empty database.
    pub async fn in_memory() -> Result<Self, DomainError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .to_infra_err()?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .to_infra_err()?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
