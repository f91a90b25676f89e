//! Error taxonomy for command and store failures
//!
//! Domain errors ([`CommandError`]) are recovered at the command boundary and
//! rendered as user-facing messages. Store errors propagate as the failure of
//! the single operation that hit them; a corrupt or unreadable document is
//! never silently replaced with defaults.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Failures from the JSON document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document exists but is not valid JSON for its schema.
    #[error("malformed document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode document for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures a slash command can report back to the user.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The user already has a running session; carries its start time so the
    /// handler can show when it began.
    #[error("a study session is already running (started {started_at})")]
    SessionAlreadyActive { started_at: DateTime<Utc> },

    #[error("no active study session")]
    NoActiveSession,

    /// The reminder time did not parse as a zero-padded `HH:MM` within range.
    #[error("invalid time format {0:?}, expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("no daily reminder is configured")]
    NoReminderSet,

    #[error(transparent)]
    Store(#[from] StoreError),
}
