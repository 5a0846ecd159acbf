//! # alarmhub-domain
//!
//! Pure domain model for the alarmhub settings service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **`AlarmTime`** (a validated `HH:MM` pair) and its unset sentinel
//! - Define **`WifiCredentials`** (the station network the device joins)
//! - Define **Events** (records of settings changes)
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod alarm;
pub mod credentials;
pub mod event;
