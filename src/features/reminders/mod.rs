//! # Reminders Feature
//!
//! Per-user daily reminder times plus the scheduler that delivers them.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Strict HH:MM validation (two digits per field)
//! - 1.0.0: Initial registry and scheduler

pub mod scheduler;

pub use scheduler::{Notifier, ReminderScheduler, SchedulerConfig};

use log::info;

use crate::core::CommandError;
use crate::store::{JsonStore, ReminderDoc};

/// Parse a strict `HH:MM` time-of-day string.
///
/// Requires exactly two digits per field (`07:30`, not `7:30` or `07:5`)
/// with `0 <= HH <= 23` and `0 <= MM <= 59`.
pub fn parse_hh_mm(raw: &str) -> Result<(u32, u32), CommandError> {
    let invalid = || CommandError::InvalidTimeFormat(raw.to_string());

    let (hh, mm) = raw.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }
    if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hh.parse().map_err(|_| invalid())?;
    let minute: u32 = mm.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Per-user desired daily reminder times over the reminder document.
#[derive(Clone)]
pub struct ReminderRegistry {
    store: JsonStore<ReminderDoc>,
}

impl ReminderRegistry {
    pub fn new(store: JsonStore<ReminderDoc>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &JsonStore<ReminderDoc> {
        &self.store
    }

    /// Upsert the user's daily reminder time.
    ///
    /// Validates `time_str` first; on rejection the registry is unchanged.
    pub async fn set(&self, user_id: &str, time_str: &str) -> Result<(), CommandError> {
        parse_hh_mm(time_str)?;

        let mut doc = self.store.load().await?;
        doc.users.insert(user_id.to_string(), time_str.to_string());
        self.store.save(&doc).await?;
        info!("daily reminder for user {user_id} set to {time_str}");
        Ok(())
    }

    /// Delete the user's reminder, returning the time it was set to.
    ///
    /// Fails with [`CommandError::NoReminderSet`] when none exists.
    pub async fn remove(&self, user_id: &str) -> Result<String, CommandError> {
        let mut doc = self.store.load().await?;
        let removed = doc
            .users
            .remove(user_id)
            .ok_or(CommandError::NoReminderSet)?;
        self.store.save(&doc).await?;
        info!("daily reminder for user {user_id} removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn registry() -> (ReminderRegistry, JsonStore<ReminderDoc>, TempDir) {
        let dir = tempdir().unwrap();
        let store: JsonStore<ReminderDoc> = JsonStore::new(dir.path().join("reminder.json"));
        (ReminderRegistry::new(store.clone()), store, dir)
    }

    #[test]
    fn test_parse_hh_mm_valid() {
        assert_eq!(parse_hh_mm("00:00").unwrap(), (0, 0));
        assert_eq!(parse_hh_mm("07:30").unwrap(), (7, 30));
        assert_eq!(parse_hh_mm("23:59").unwrap(), (23, 59));
    }

    #[test]
    fn test_parse_hh_mm_rejects_malformed() {
        for raw in ["25:00", "07:60", "07:5", "7:30", "0730", "07:30:00", "ab:cd", "", " 7:30"] {
            assert!(
                matches!(parse_hh_mm(raw), Err(CommandError::InvalidTimeFormat(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_set_persists_entry() {
        let (registry, store, _dir) = registry();
        registry.set("42", "07:30").await.unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.users.get("42").map(String::as_str), Some("07:30"));
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_time() {
        let (registry, store, _dir) = registry();
        registry.set("42", "07:30").await.unwrap();
        registry.set("42", "21:15").await.unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.users.len(), 1);
        assert_eq!(doc.users.get("42").map(String::as_str), Some("21:15"));
    }

    #[tokio::test]
    async fn test_invalid_time_leaves_registry_unchanged() {
        let (registry, store, _dir) = registry();
        registry.set("42", "07:30").await.unwrap();

        for raw in ["25:00", "07:5"] {
            let err = registry.set("42", raw).await.unwrap_err();
            assert!(matches!(err, CommandError::InvalidTimeFormat(_)));
        }

        let doc = store.load().await.unwrap();
        assert_eq!(doc.users.get("42").map(String::as_str), Some("07:30"));
    }

    #[tokio::test]
    async fn test_remove_returns_previous_time() {
        let (registry, store, _dir) = registry();
        registry.set("42", "07:30").await.unwrap();

        assert_eq!(registry.remove("42").await.unwrap(), "07:30");
        let doc = store.load().await.unwrap();
        assert!(doc.users.is_empty());
    }

    #[tokio::test]
    async fn test_remove_without_entry_fails() {
        let (registry, _store, _dir) = registry();
        let err = registry.remove("42").await.unwrap_err();
        assert!(matches!(err, CommandError::NoReminderSet));
    }
}
