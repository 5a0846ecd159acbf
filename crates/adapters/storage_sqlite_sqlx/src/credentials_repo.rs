//! `SQLite` implementation of [`CredentialsRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use alarmhub_app::ports::CredentialsRepository;
use alarmhub_domain::credentials::WifiCredentials;
use alarmhub_domain::error::AlarmHubError;
use alarmhub_domain::time::now_rfc3339;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`WifiCredentials`].
struct Wrapper(WifiCredentials);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(WifiCredentials {
            ssid: row.try_get("ssid")?,
            password: row.try_get("password")?,
        }))
    }
}

const UPSERT: &str = "INSERT INTO wifi_credentials (id, ssid, password, updated_at) \
    VALUES (1, ?, ?, ?) \
    ON CONFLICT (id) DO UPDATE SET ssid = excluded.ssid, password = excluded.password, \
    updated_at = excluded.updated_at";
const SELECT: &str = "SELECT ssid, password FROM wifi_credentials WHERE id = 1";
const DELETE: &str = "DELETE FROM wifi_credentials";

/// `SQLite`-backed credentials repository.
pub struct SqliteCredentialsRepository {
    pool: SqlitePool,
}

impl SqliteCredentialsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CredentialsRepository for SqliteCredentialsRepository {
    fn get(&self) -> impl Future<Output = Result<Option<WifiCredentials>, AlarmHubError>> + Send {
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
        credentials: WifiCredentials,
    ) -> impl Future<Output = Result<WifiCredentials, AlarmHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPSERT)
                .bind(&credentials.ssid)
                .bind(&credentials.password)
                .bind(now_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(credentials)
        }
    }

    fn clear(&self) -> impl Future<Output = Result<(), AlarmHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
