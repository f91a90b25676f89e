//! # Study Session Feature
//!
//! Per-user study timers. Each user has at most one live session; starting
//! records the start time in the active-session map, stopping removes it,
//! computes the elapsed duration, and appends an immutable log entry.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add daily summary
//! - 1.0.0: Initial start/stop tracking with duration formatting

use chrono::{DateTime, Utc};
use log::info;

use crate::core::CommandError;
use crate::store::{JsonStore, LogEntry, StudyLog};

/// How many recent sessions a daily summary lists.
const SUMMARY_RECENT_LIMIT: usize = 5;

/// Format whole seconds as a compact human duration.
///
/// Hours appear only when non-zero, minutes whenever hours or minutes are
/// non-zero, and seconds always: `45s`, `2m 5s`, `1h 0m 0s`.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;

    let mut parts = Vec::new();
    if h > 0 {
        parts.push(format!("{h}h"));
    }
    if h > 0 || m > 0 {
        parts.push(format!("{m}m"));
    }
    parts.push(format!("{s}s"));
    parts.join(" ")
}

/// Summary of one user's completed sessions for a calendar day.
#[derive(Debug, Clone)]
pub struct DailySummary {
    pub sessions: usize,
    pub total_seconds: i64,
    /// The most recent sessions of the day, in original chronological order.
    pub recent: Vec<LogEntry>,
}

/// Start/stop timer logic over the study log document.
///
/// Every operation reloads the document before mutating it so near-
/// simultaneous invocations observe each other's committed writes.
#[derive(Clone)]
pub struct SessionTracker {
    store: JsonStore<StudyLog>,
}

impl SessionTracker {
    pub fn new(store: JsonStore<StudyLog>) -> Self {
        Self { store }
    }

    /// Begin a session for `user_id` at `now`.
    ///
    /// Returns the recorded start time, or [`CommandError::SessionAlreadyActive`]
    /// carrying the existing start time when a timer is already running. The
    /// existing session is left untouched in that case.
    pub async fn start(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, CommandError> {
        let mut doc = self.store.load().await?;

        if let Some(&started_at) = doc.active_sessions.get(user_id) {
            return Err(CommandError::SessionAlreadyActive { started_at });
        }

        doc.active_sessions.insert(user_id.to_string(), now);
        self.store.save(&doc).await?;
        info!("study session started for user {user_id}");
        Ok(now)
    }

    /// End the session for `user_id` at `now` and append its log entry.
    ///
    /// Duration is `now - start` in whole seconds, truncated toward zero and
    /// clamped to zero if clock skew put `now` before the start. Returns the
    /// appended entry; fails with [`CommandError::NoActiveSession`] (and
    /// performs no write) when no timer is running.
    pub async fn stop(&self, user_id: &str, now: DateTime<Utc>) -> Result<LogEntry, CommandError> {
        let mut doc = self.store.load().await?;

        let start = doc
            .active_sessions
            .remove(user_id)
            .ok_or(CommandError::NoActiveSession)?;

        let duration_seconds = (now - start).num_seconds().max(0);
        let entry = LogEntry {
            user_id: user_id.to_string(),
            start,
            end: now,
            duration_seconds,
            duration_human: format_duration(duration_seconds),
            saved_at: now,
        };
        doc.logs.push(entry.clone());
        self.store.save(&doc).await?;
        info!(
            "study session stopped for user {user_id} after {}",
            entry.duration_human
        );
        Ok(entry)
    }

    /// Summarize the user's sessions saved on `now`'s UTC calendar day.
    ///
    /// Attribution follows `saved_at`, not the session start: a session
    /// running across midnight counts toward the day it was stopped.
    pub async fn summary_today(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DailySummary, CommandError> {
        let doc = self.store.load().await?;
        let today = now.date_naive();

        let entries: Vec<&LogEntry> = doc
            .logs
            .iter()
            .filter(|l| l.user_id == user_id && l.saved_at.date_naive() == today)
            .collect();

        let total_seconds = entries.iter().map(|l| l.duration_seconds).sum();
        let recent = entries
            .iter()
            .rev()
            .take(SUMMARY_RECENT_LIMIT)
            .rev()
            .map(|l| (*l).clone())
            .collect();

        Ok(DailySummary {
            sessions: entries.len(),
            total_seconds,
            recent,
        })
    }
}
