//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::features::progress::ProgressLog;
use crate::features::reminders::ReminderRegistry;
use crate::features::study::SessionTracker;
use crate::store::{JsonStore, ReminderDoc, StudyLog};
use std::path::Path;

/// Shared context for all command handlers.
///
/// Holds the feature services every handler can need:
/// - SessionTracker for study timers
/// - ProgressLog for notes
/// - ReminderRegistry for daily reminder times
#[derive(Clone)]
pub struct CommandContext {
    pub tracker: SessionTracker,
    pub progress: ProgressLog,
    pub reminders: ReminderRegistry,
}

impl CommandContext {
    pub fn new(tracker: SessionTracker, progress: ProgressLog, reminders: ReminderRegistry) -> Self {
        Self {
            tracker,
            progress,
            reminders,
        }
    }

    /// Build a context whose documents live under `data_dir`.
    pub fn from_data_dir(data_dir: &Path) -> Self {
        let study_store: JsonStore<StudyLog> = JsonStore::new(data_dir.join("study_log.json"));
        let reminder_store: JsonStore<ReminderDoc> = JsonStore::new(data_dir.join("reminder.json"));
        Self {
            tracker: SessionTracker::new(study_store.clone()),
            progress: ProgressLog::new(study_store),
            reminders: ReminderRegistry::new(reminder_store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_context_clone() {
        // CommandContext should be Clone for sharing across handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<CommandContext>();
    }

    #[test]
    fn test_from_data_dir_builds() {
        let _ctx = CommandContext::from_data_dir(Path::new("data"));
    }
}
