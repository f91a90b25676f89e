//! Reminder delivery scheduler
//!
//! Two recurring triggers share one task: a per-minute sweep that DMs every
//! user whose registered `HH:MM` matches the current local wall clock, and a
//! daily broadcast to one configured channel at a fixed local time.
//!
//! Both triggers are best-effort by design. The sweep compares minute-
//! granularity strings, so a delayed or skipped tick (system sleep, long
//! pause) silently misses that minute's reminders; catch-up ticks after a
//! stall are skipped outright, never fired in a burst, so one minute is
//! swept at most once. Deliveries are fire and forget: per-recipient
//! failures are logged and never retried, and a missed daily broadcast is
//! not retried within the same day.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use log::{info, warn};
use rand::seq::IndexedRandom;
use serenity::http::Http;
use serenity::model::id::{ChannelId, UserId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::StoreError;
use crate::store::{JsonStore, ReminderDoc};

use super::ReminderRegistry;

/// Lines sent with personal reminder DMs, chosen uniformly at random.
const MOTIVATIONAL_LINES: [&str; 5] = [
    "Small progress is still progress 🌱",
    "Your future self will thank you.",
    "Discipline beats motivation ✨",
    "One step at a time. You got this! 💪",
    "Consistent > perfect. Keep going! 🔥",
];

/// Fixed text of the daily channel broadcast.
const DAILY_BROADCAST_TEXT: &str =
    "Good evening! Don't forget to get some studying in today. 💪📚";

/// Outbound delivery seam, so scheduling logic is testable without a gateway.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a direct message to a user.
    async fn dm_user(&self, user_id: u64, content: &str) -> Result<()>;

    /// Send a message to a channel.
    async fn broadcast(&self, channel_id: u64, content: &str) -> Result<()>;
}

/// [`Notifier`] backed by the Discord HTTP API.
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn dm_user(&self, user_id: u64, content: &str) -> Result<()> {
        let dm = UserId(user_id).create_dm_channel(&*self.http).await?;
        dm.say(&*self.http, content).await?;
        Ok(())
    }

    async fn broadcast(&self, channel_id: u64, content: &str) -> Result<()> {
        ChannelId(channel_id).say(&*self.http, content).await?;
        Ok(())
    }
}

/// Scheduler configuration, passed in whole at construction.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Fixed local-time offset used for both triggers.
    pub offset: FixedOffset,
    /// Channel receiving the daily broadcast; `None` disables it with a log.
    pub broadcast_channel: Option<u64>,
    /// Local wall-clock hour and minute of the daily broadcast.
    pub daily_time: (u32, u32),
}

impl SchedulerConfig {
    pub fn new(
        offset_hours: i32,
        daily_time: (u32, u32),
        broadcast_channel: Option<u64>,
    ) -> Result<Self> {
        let offset = FixedOffset::east_opt(offset_hours * 3600)
            .with_context(|| format!("invalid UTC offset: {offset_hours} hours"))?;
        Ok(Self {
            offset,
            broadcast_channel,
            daily_time,
        })
    }
}

/// Runs the per-minute sweep and the daily broadcast.
pub struct ReminderScheduler {
    store: JsonStore<ReminderDoc>,
    config: SchedulerConfig,
    running: AtomicBool,
}

impl ReminderScheduler {
    pub fn new(registry: &ReminderRegistry, config: SchedulerConfig) -> Self {
        Self {
            store: registry.store().clone(),
            config,
            running: AtomicBool::new(false),
        }
    }

    /// Run both trigger loops until the task is dropped.
    ///
    /// Starting is idempotent: a second call while the loops are live
    /// returns immediately.
    pub async fn run(&self, notifier: Arc<dyn Notifier>) {
        if !self.claim_run() {
            info!("reminder scheduler already running, ignoring start");
            return;
        }
        info!(
            "reminder scheduler started (offset {}, daily broadcast {:02}:{:02})",
            self.config.offset, self.config.daily_time.0, self.config.daily_time.1
        );

        tokio::join!(self.sweep_loop(notifier.clone()), self.daily_loop(notifier));
    }

    fn claim_run(&self) -> bool {
        !self.running.swap(true, Ordering::SeqCst)
    }

    async fn sweep_loop(&self, notifier: Arc<dyn Notifier>) {
        let mut interval = sweep_interval();
        loop {
            interval.tick().await;
            let now_local = Utc::now().with_timezone(&self.config.offset);
            if let Err(e) = self.sweep_once(&*notifier, now_local).await {
                warn!("reminder sweep skipped: {e}");
            }
        }
    }

    /// One sweep: DM every user registered for the current local minute.
    ///
    /// Per-recipient failures are logged and do not abort the sweep for the
    /// remaining users. Returns the number of successful deliveries.
    pub async fn sweep_once(
        &self,
        notifier: &dyn Notifier,
        now_local: DateTime<FixedOffset>,
    ) -> Result<usize, StoreError> {
        let doc = self.store.load().await?;
        let current = now_local.format("%H:%M").to_string();

        let mut sent = 0;
        for (user_id, time_str) in &doc.users {
            if *time_str != current {
                continue;
            }
            let Ok(uid) = user_id.parse::<u64>() else {
                warn!("skipping reminder entry with non-numeric user ID {user_id:?}");
                continue;
            };

            let line = MOTIVATIONAL_LINES
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(MOTIVATIONAL_LINES[0]);
            let message = format!("⏰ **Time to study!**\n{line}");
            match notifier.dm_user(uid, &message).await {
                Ok(()) => {
                    info!("sent study reminder to user {uid}");
                    sent += 1;
                }
                Err(e) => warn!("failed to DM reminder to user {uid}: {e}"),
            }
        }
        Ok(sent)
    }

    async fn daily_loop(&self, notifier: Arc<dyn Notifier>) {
        let (hour, minute) = self.config.daily_time;
        loop {
            let now_local = Utc::now().with_timezone(&self.config.offset);
            tokio::time::sleep(until_next_daily(now_local, hour, minute)).await;
            self.daily_broadcast_once(&*notifier).await;
        }
    }

    /// Send the fixed daily broadcast; log and skip when no channel is
    /// configured or the send fails. No retry until the next day.
    pub async fn daily_broadcast_once(&self, notifier: &dyn Notifier) {
        let Some(channel_id) = self.config.broadcast_channel else {
            warn!("daily broadcast channel not configured, skipping");
            return;
        };
        match notifier.broadcast(channel_id, DAILY_BROADCAST_TEXT).await {
            Ok(()) => info!("daily study broadcast sent to channel {channel_id}"),
            Err(e) => warn!("daily broadcast to channel {channel_id} failed: {e}"),
        }
    }
}

/// Ticker for the per-minute sweep.
///
/// Missed ticks are skipped, not burst: after a stall every catch-up tick
/// would observe the same wall-clock minute and deliver its reminders again.
fn sweep_interval() -> tokio::time::Interval {
    let mut interval = tokio::time::interval(Duration::from_secs(60));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    interval
}

/// Time until the next local occurrence of `hour:minute`, strictly after `now`.
fn until_next_daily(now: DateTime<FixedOffset>, hour: u32, minute: u32) -> Duration {
    let Some(target_naive) = now.date_naive().and_hms_opt(hour, minute, 0) else {
        // Out-of-range target time; retry shortly rather than spin
        return Duration::from_secs(60);
    };
    // A fixed offset has no ambiguous local times
    let Some(mut target) = now.offset().from_local_datetime(&target_naive).single() else {
        return Duration::from_secs(60);
    };
    if target <= now {
        target += chrono::Duration::days(1);
    }
    (target - now).to_std().unwrap_or(Duration::from_secs(60))
}
