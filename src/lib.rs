// Core layer - configuration, errors, shared embed builders
pub mod core;

// Features layer - session tracking, progress notes, reminders
pub mod features;

// Persistence layer - JSON document store
pub mod store;

// Application layer
pub mod command_handler;
pub mod commands;

// Re-export core config for convenience
pub use crate::core::Config;

// Re-export feature items
pub use features::{
    // Study sessions
    format_duration, DailySummary, SessionTracker,
    // Progress notes
    ProgressLog,
    // Reminders
    Notifier, ReminderRegistry, ReminderScheduler, SchedulerConfig,
};
