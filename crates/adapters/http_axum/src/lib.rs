//! # alarmhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **settings pages** rendered server-side with askama
//!   (`/`, `/alarm`, `/wifi`), with stored values substituted and
//!   HTML-escaped
//! - Serve the **plain-text alarm endpoints** the pages call from their
//!   inline scripts (`/get_alarm`, `/set_alarm`)
//! - Handle the **credential forms** (`/configure`, `/clear`)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `alarmhub-app` (for port traits and services) and `alarmhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
