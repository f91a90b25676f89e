//! Environment-driven configuration
//!
//! All settings are read once at startup into an explicit [`Config`] record;
//! nothing mutates process environment state after that. The scheduler
//! receives its slice of this record at construction.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Default local-time offset for reminder scheduling (UTC+7).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Default local wall-clock time for the daily channel broadcast.
pub const DEFAULT_DAILY_BROADCAST_TIME: &str = "19:00";

/// Bot configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token (required).
    pub discord_token: String,
    /// Guild ID for instant command registration in development.
    /// When unset, commands are registered globally.
    pub discord_guild_id: Option<u64>,
    /// Channel receiving the daily study broadcast. Optional; the daily
    /// loop logs and skips when unset.
    pub reminder_channel_id: Option<u64>,
    /// Fixed local-time offset in whole hours for the scheduler.
    pub utc_offset_hours: i32,
    /// Local `HH:MM` wall-clock time of the daily broadcast.
    pub daily_broadcast_time: String,
    /// Directory holding the persisted JSON documents.
    pub data_dir: PathBuf,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DISCORD_TOKEN`. Optional with defaults:
    /// `DISCORD_GUILD_ID`, `REMINDER_CHANNEL_ID`, `UTC_OFFSET_HOURS` (7),
    /// `DAILY_BROADCAST_TIME` (19:00), `DATA_DIR` (data), `LOG_LEVEL` (info).
    ///
    /// Every set variable must parse; a malformed ID or time is an error at
    /// startup, never a silent fallback.
    pub fn from_env() -> Result<Self> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .context("DISCORD_TOKEN environment variable not set")?;
        if discord_token.trim().is_empty() {
            bail!("DISCORD_TOKEN is empty");
        }

        let discord_guild_id = match std::env::var("DISCORD_GUILD_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("DISCORD_GUILD_ID is not a guild ID: {raw:?}"))?,
            ),
            _ => None,
        };

        let reminder_channel_id = match std::env::var("REMINDER_CHANNEL_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("REMINDER_CHANNEL_ID is not a channel ID: {raw:?}"))?,
            ),
            _ => None,
        };

        let utc_offset_hours = match std::env::var("UTC_OFFSET_HOURS") {
            Ok(raw) => raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("UTC_OFFSET_HOURS is not an integer: {raw:?}"))?,
            Err(_) => DEFAULT_UTC_OFFSET_HOURS,
        };
        if !(-12..=14).contains(&utc_offset_hours) {
            bail!("UTC_OFFSET_HOURS out of range: {utc_offset_hours}");
        }

        let daily_broadcast_time = std::env::var("DAILY_BROADCAST_TIME")
            .unwrap_or_else(|_| DEFAULT_DAILY_BROADCAST_TIME.to_string());
        crate::features::reminders::parse_hh_mm(&daily_broadcast_time).with_context(|| {
            format!("DAILY_BROADCAST_TIME is not HH:MM: {daily_broadcast_time:?}")
        })?;

        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            discord_token,
            discord_guild_id,
            reminder_channel_id,
            utc_offset_hours,
            daily_broadcast_time,
            data_dir,
            log_level,
        })
    }

    /// Path of the session/progress log document.
    pub fn study_log_path(&self) -> PathBuf {
        self.data_dir.join("study_log.json")
    }

    /// Path of the reminder schedule document.
    pub fn reminder_path(&self) -> PathBuf {
        self.data_dir.join("reminder.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            discord_token: "token".to_string(),
            discord_guild_id: None,
            reminder_channel_id: None,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            daily_broadcast_time: DEFAULT_DAILY_BROADCAST_TIME.to_string(),
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_document_paths() {
        let config = base_config();
        assert_eq!(config.study_log_path(), PathBuf::from("data/study_log.json"));
        assert_eq!(config.reminder_path(), PathBuf::from("data/reminder.json"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_UTC_OFFSET_HOURS, 7);
        assert_eq!(DEFAULT_DAILY_BROADCAST_TIME, "19:00");
    }

    // Single test for all from_env cases: env vars are process-global, so
    // the mutations must not run concurrently from separate tests.
    #[test]
    fn test_from_env_rejects_malformed_values() {
        std::env::set_var("DISCORD_TOKEN", "token");

        std::env::set_var("DISCORD_GUILD_ID", "not-a-number");
        assert!(Config::from_env().is_err());

        std::env::set_var("DISCORD_GUILD_ID", "123456");
        std::env::set_var("DAILY_BROADCAST_TIME", "7pm");
        assert!(Config::from_env().is_err());

        std::env::remove_var("DAILY_BROADCAST_TIME");
        let config = Config::from_env().unwrap();
        assert_eq!(config.discord_guild_id, Some(123456));
        assert_eq!(config.daily_broadcast_time, DEFAULT_DAILY_BROADCAST_TIME);

        std::env::remove_var("DISCORD_GUILD_ID");
        std::env::remove_var("DISCORD_TOKEN");
    }
}
