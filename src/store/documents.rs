//! Persisted document schemas
//!
//! Two documents own all durable state: the study log (active sessions,
//! completed-session entries, progress notes) and the reminder schedule.
//! Wire format is pretty-printed UTF-8 JSON with RFC 3339 timestamps.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The session/progress log document (`study_log.json`).
///
/// Invariant: a user ID is a key of `active_sessions` iff that user has an
/// unterminated session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyLog {
    /// Live timers: user ID -> session start time.
    #[serde(default)]
    pub active_sessions: HashMap<String, DateTime<Utc>>,
    /// Completed sessions, append-only.
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// Free-text progress notes, append-only, in insertion order.
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
}

/// One completed study session. Written exactly once when a session stops,
/// never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub user_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_seconds: i64,
    pub duration_human: String,
    /// When the entry was persisted. Drives the "today" attribution of
    /// session summaries (a session stopped after midnight counts toward
    /// the stop day).
    pub saved_at: DateTime<Utc>,
}

/// One free-text progress note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// The reminder schedule document (`reminder.json`).
///
/// At most one entry per user; the value is a validated local `HH:MM` string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReminderDoc {
    #[serde(default)]
    pub users: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_log_accepts_minimal_document() {
        // Documents written by older iterations may omit empty collections
        let doc: StudyLog = serde_json::from_str("{}").unwrap();
        assert!(doc.active_sessions.is_empty());
        assert!(doc.logs.is_empty());
        assert!(doc.progress.is_empty());
    }

    #[test]
    fn test_log_entry_wire_format() {
        let entry = LogEntry {
            user_id: "42".to_string(),
            start: "2024-01-01T00:00:00Z".parse().unwrap(),
            end: "2024-01-01T00:01:05Z".parse().unwrap(),
            duration_seconds: 65,
            duration_human: "1m 5s".to_string(),
            saved_at: "2024-01-01T00:01:05Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["user_id"], "42");
        assert_eq!(json["duration_seconds"], 65);
        assert_eq!(json["duration_human"], "1m 5s");
        assert_eq!(json["start"], "2024-01-01T00:00:00Z");

        let back: LogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_reminder_doc_shape() {
        let doc: ReminderDoc = serde_json::from_str(r#"{"users":{"42":"07:30"}}"#).unwrap();
        assert_eq!(doc.users.get("42").map(String::as_str), Some("07:30"));
    }
}
