//! # alarmhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `alarmhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `alarmhub-app` (for port traits) and `alarmhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod alarm_repo;
mod credentials_repo;
mod error;
mod pool;

pub use alarm_repo::SqliteAlarmRepository;
pub use credentials_repo::SqliteCredentialsRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
