//! Progress note command handlers
//!
//! Handles: progress_add, progress_list
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::handlers::{reply_embed, reply_text};
use crate::commands::slash::{get_integer_option, get_string_option};
use crate::core::embeds::{titled_embed, COLOR_NEUTRAL};
use crate::features::progress::DEFAULT_LIST_LIMIT;

/// Most notes a single listing will render.
const MAX_LIST_LIMIT: usize = 25;

/// Handler for progress note commands
pub struct ProgressHandler;

#[async_trait]
impl SlashCommandHandler for ProgressHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["progress_add", "progress_list"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "progress_add" => self.handle_add(&ctx, serenity_ctx, command).await,
            "progress_list" => self.handle_list(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl ProgressHandler {
    /// Handle /progress_add - append a note
    async fn handle_add(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        let text = get_string_option(&command.data.options, "text")
            .ok_or_else(|| anyhow::anyhow!("Missing text parameter"))?;

        let entry = ctx.progress.add(&user_id, &text, Utc::now()).await?;
        reply_text(
            serenity_ctx,
            command,
            &format!("Progress saved: `{}`", entry.text),
        )
        .await
    }

    /// Handle /progress_list - recent notes, oldest first
    async fn handle_list(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        let limit = get_integer_option(&command.data.options, "limit")
            .map(|n| (n.max(1) as usize).min(MAX_LIST_LIMIT))
            .unwrap_or(DEFAULT_LIST_LIMIT);

        let notes = ctx.progress.list(&user_id, limit).await?;
        if notes.is_empty() {
            return reply_text(serenity_ctx, command, "No progress notes saved yet.").await;
        }

        let mut embed = titled_embed(
            "Recent Progress",
            "Your latest notes, oldest first.",
            COLOR_NEUTRAL,
        );
        for note in &notes {
            embed.field(note.created_at.to_rfc3339(), &note.text, false);
        }
        reply_embed(serenity_ctx, command, embed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_handler_commands() {
        let handler = ProgressHandler;
        let names = handler.command_names();

        assert!(names.contains(&"progress_add"));
        assert!(names.contains(&"progress_list"));
        assert_eq!(names.len(), 2);
    }
}
