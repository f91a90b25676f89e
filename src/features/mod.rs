//! # Features Module
//!
//! The feature layer owns all state-transition and timing logic. Each feature
//! reads and writes the persistent store through its own handle; the Discord
//! adapter only translates interactions in and embeds out.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Route all persistence through per-feature store handles
//! - 1.1.0: Add daily summary to study feature
//! - 1.0.0: Initial creation with study, progress, and reminders

pub mod progress;
pub mod reminders;
pub mod study;

pub use progress::ProgressLog;
pub use reminders::{Notifier, ReminderRegistry, ReminderScheduler, SchedulerConfig};
pub use study::{format_duration, DailySummary, SessionTracker};
