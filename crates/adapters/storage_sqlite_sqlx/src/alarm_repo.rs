//! `SQLite` implementation of [`AlarmRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use alarmhub_app::ports::AlarmRepository;
use alarmhub_domain::alarm::AlarmTime;
use alarmhub_domain::error::AlarmHubError;
use alarmhub_domain::time::now_rfc3339;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`AlarmTime`].
struct Wrapper(AlarmTime);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let hour: i64 = row.try_get("hour")?;
        let minute: i64 = row.try_get("minute")?;

        let hour = u32::try_from(hour).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let minute = u32::try_from(minute).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let alarm =
            AlarmTime::new(hour, minute).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(alarm))
    }
}

const UPSERT: &str = "INSERT INTO alarm (id, hour, minute, updated_at) VALUES (1, ?, ?, ?) \
    ON CONFLICT (id) DO UPDATE SET hour = excluded.hour, minute = excluded.minute, \
    updated_at = excluded.updated_at";
const SELECT: &str = "SELECT hour, minute FROM alarm WHERE id = 1";

/// `SQLite`-backed alarm repository.
pub struct SqliteAlarmRepository {
    pool: SqlitePool,
}

impl SqliteAlarmRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AlarmRepository for SqliteAlarmRepository {
    fn get(&self) -> impl Future<Output = Result<Option<AlarmTime>, AlarmHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn save(
        &self,
        alarm: AlarmTime,
    ) -> impl Future<Output = Result<AlarmTime, AlarmHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPSERT)
                .bind(i64::from(alarm.hour()))
                .bind(i64::from(alarm.minute()))
                .bind(now_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(alarm)
        }
    }
}
