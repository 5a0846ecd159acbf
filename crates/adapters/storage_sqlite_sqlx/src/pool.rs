//! Settings database: opening the `SQLite` file and applying the schema.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// How long a writer waits for a concurrent writer before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the settings live.
pub struct Config {
    /// `SQLite` connection URL, e.g. `sqlite:alarmhub.db?mode=rwc` or
    /// `sqlite::memory:`.
    pub database_url: String,
}

impl Config {
    /// Open the settings database, creating the file on first boot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is malformed, the file cannot be
    /// opened, or the schema cannot be applied.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::open(&self.database_url).await
    }
}

/// An open settings database.
///
/// The schema holds two single-row tables, `alarm` and `wifi_credentials`,
/// each pinned to `id = 1`. A missing row means the setting was never made
/// (or was cleared).
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn open(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Pool shared by the alarm and credentials repositories.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
