//! Study session command handlers
//!
//! Handles: study_start, study_stop, study_summary
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::handlers::{reply_embed, reply_text};
use crate::core::embeds::{titled_embed, COLOR_REPORT, COLOR_SUCCESS, COLOR_WARNING};
use crate::core::CommandError;
use crate::features::study::format_duration;

/// Handler for study session commands
pub struct StudyHandler;

#[async_trait]
impl SlashCommandHandler for StudyHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["study_start", "study_stop", "study_summary"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "study_start" => self.handle_start(&ctx, serenity_ctx, command).await,
            "study_stop" => self.handle_stop(&ctx, serenity_ctx, command).await,
            "study_summary" => self.handle_summary(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl StudyHandler {
    /// Handle /study_start - begin the user's timer
    async fn handle_start(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        debug!("study_start requested by user {user_id}");

        match ctx.tracker.start(&user_id, Utc::now()).await {
            Ok(started_at) => {
                let mut embed = titled_embed(
                    "Session started ✅",
                    "Study timer is running. Focus for 25-50 minutes, then take a short break!",
                    COLOR_SUCCESS,
                );
                embed.field("Started (UTC)", started_at.to_rfc3339(), false);
                reply_embed(serenity_ctx, command, embed).await
            }
            Err(CommandError::SessionAlreadyActive { started_at }) => {
                let embed = titled_embed(
                    "Session already running",
                    &format!(
                        "You already started a session at `{}` (UTC).",
                        started_at.to_rfc3339()
                    ),
                    COLOR_WARNING,
                );
                reply_embed(serenity_ctx, command, embed).await
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Handle /study_stop - end the timer and report the duration
    async fn handle_stop(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        debug!("study_stop requested by user {user_id}");

        match ctx.tracker.stop(&user_id, Utc::now()).await {
            Ok(entry) => {
                let mut embed = titled_embed(
                    "Session stopped ✅",
                    &format!("Duration: **{}**", entry.duration_human),
                    COLOR_REPORT,
                );
                embed.field("Started (UTC)", entry.start.to_rfc3339(), true);
                embed.field("Finished (UTC)", entry.end.to_rfc3339(), true);
                reply_embed(serenity_ctx, command, embed).await
            }
            Err(CommandError::NoActiveSession) => {
                reply_text(
                    serenity_ctx,
                    command,
                    "No session is running. Start one with `/study_start`.",
                )
                .await
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Handle /study_summary - today's totals and recent sessions
    async fn handle_summary(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        let summary = ctx.tracker.summary_today(&user_id, Utc::now()).await?;

        if summary.sessions == 0 {
            return reply_text(serenity_ctx, command, "No study sessions saved today yet.").await;
        }

        let mut embed = titled_embed(
            "Today's Summary",
            "Your completed study sessions for today.",
            COLOR_SUCCESS,
        );
        embed.field("Sessions", summary.sessions.to_string(), true);
        embed.field("Total time", format_duration(summary.total_seconds), true);
        for entry in &summary.recent {
            embed.field(entry.start.to_rfc3339(), &entry.duration_human, false);
        }
        reply_embed(serenity_ctx, command, embed).await
    }
}
