//! Aurora web shell.
//!
//! Routes `/` and `/home` through the framework router; the splash screen
//! replaces itself with the home path after the configured delay, so the
//! browser back button cannot return to it.

pub mod routes;
mod time;

pub use routes::{Root, WebRoute};
