//! # Progress Notes Feature
//!
//! Append-only free-text notes per user, with bounded-recency retrieval.
//! Text is stored verbatim; rejecting empty notes is left to the adapter
//! edge (the slash option is marked required there).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use chrono::{DateTime, Utc};
use log::debug;

use crate::core::CommandError;
use crate::store::{JsonStore, ProgressEntry, StudyLog};

/// Default number of notes returned by a listing.
pub const DEFAULT_LIST_LIMIT: usize = 10;

#[derive(Clone)]
pub struct ProgressLog {
    store: JsonStore<StudyLog>,
}

impl ProgressLog {
    pub fn new(store: JsonStore<StudyLog>) -> Self {
        Self { store }
    }

    /// Append a note for `user_id` and return the stored entry.
    pub async fn add(
        &self,
        user_id: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<ProgressEntry, CommandError> {
        let mut doc = self.store.load().await?;
        let entry = ProgressEntry {
            user_id: user_id.to_string(),
            text: text.to_string(),
            created_at: now,
        };
        doc.progress.push(entry.clone());
        self.store.save(&doc).await?;
        debug!("progress note saved for user {user_id}");
        Ok(entry)
    }

    /// Return up to the last `limit` notes for `user_id`.
    ///
    /// The window is the chronological tail of the user's notes, returned
    /// oldest-first. No notes is an empty list, not an error.
    pub async fn list(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, CommandError> {
        let doc = self.store.load().await?;
        let mine: Vec<ProgressEntry> = doc
            .progress
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .collect();
        let skip = mine.len().saturating_sub(limit);
        Ok(mine.into_iter().skip(skip).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn progress_log() -> (ProgressLog, TempDir) {
        let dir = tempdir().unwrap();
        let store: JsonStore<StudyLog> = JsonStore::new(dir.path().join("study_log.json"));
        (ProgressLog::new(store), dir)
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let (log, _dir) = progress_log();
        log.add("a", "read chapter 3", at("2024-01-01T08:00:00Z"))
            .await
            .unwrap();

        let notes = log.list("a", DEFAULT_LIST_LIMIT).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "read chapter 3");
    }

    #[tokio::test]
    async fn test_list_returns_chronological_tail() {
        let (log, _dir) = progress_log();
        for i in 0..12 {
            let when = at(&format!("2024-01-01T{:02}:00:00Z", i + 1));
            log.add("a", &format!("note {i}"), when).await.unwrap();
        }

        let notes = log.list("a", 10).await.unwrap();
        assert_eq!(notes.len(), 10);
        // Last 10, oldest first within the window
        assert_eq!(notes[0].text, "note 2");
        assert_eq!(notes[9].text, "note 11");
    }

    #[tokio::test]
    async fn test_list_filters_by_user() {
        let (log, _dir) = progress_log();
        log.add("a", "mine", at("2024-01-01T08:00:00Z")).await.unwrap();
        log.add("b", "theirs", at("2024-01-01T09:00:00Z")).await.unwrap();

        let notes = log.list("a", DEFAULT_LIST_LIMIT).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "mine");
    }

    #[tokio::test]
    async fn test_list_with_no_notes_is_empty_not_error() {
        let (log, _dir) = progress_log();
        let notes = log.list("a", DEFAULT_LIST_LIMIT).await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_text_is_accepted() {
        // The core stores text verbatim; the adapter edge owns validation
        let (log, _dir) = progress_log();
        let entry = log.add("a", "   ", at("2024-01-01T08:00:00Z")).await.unwrap();
        assert_eq!(entry.text, "   ");
    }
}
