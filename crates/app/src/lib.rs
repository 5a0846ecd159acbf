//! # alarmhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AlarmRepository`: load and store the alarm time
//!   - `CredentialsRepository`: load, store and erase Wi-Fi credentials
//!   - `EventPublisher`: announce settings changes
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AlarmService`: read and set the alarm
//!   - `CredentialsService`: read, configure and clear credentials
//! - Provide **in-process infrastructure** (event bus, restart watcher) that
//!   doesn't need IO
//!
//! ## Dependency rule
//! Depends on `alarmhub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod restart;
pub mod services;
