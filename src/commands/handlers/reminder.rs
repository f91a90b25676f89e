//! Daily reminder command handlers
//!
//! Handles: set_reminder, remove_reminder
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::handlers::reply_text;
use crate::commands::slash::get_string_option;
use crate::core::CommandError;

/// Handler for daily reminder commands
pub struct ReminderHandler;

#[async_trait]
impl SlashCommandHandler for ReminderHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["set_reminder", "remove_reminder"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "set_reminder" => self.handle_set(&ctx, serenity_ctx, command).await,
            "remove_reminder" => self.handle_remove(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl ReminderHandler {
    /// Handle /set_reminder - upsert the user's daily HH:MM
    async fn handle_set(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();
        let time_str = get_string_option(&command.data.options, "time")
            .ok_or_else(|| anyhow::anyhow!("Missing time parameter"))?;

        match ctx.reminders.set(&user_id, &time_str).await {
            Ok(()) => {
                reply_text(
                    serenity_ctx,
                    command,
                    &format!(
                        "⏰ Daily reminder set for **{time_str}** (local time).\nI'll nudge you to study! 📚🔥"
                    ),
                )
                .await
            }
            Err(CommandError::InvalidTimeFormat(_)) => {
                reply_text(
                    serenity_ctx,
                    command,
                    "Wrong format! Use HH:MM, for example `07:30`.",
                )
                .await
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Handle /remove_reminder - delete the user's entry
    async fn handle_remove(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = command.user.id.to_string();

        match ctx.reminders.remove(&user_id).await {
            Ok(_) => {
                reply_text(serenity_ctx, command, "❌ Your daily reminder is turned off.").await
            }
            Err(CommandError::NoReminderSet) => {
                reply_text(serenity_ctx, command, "You don't have an active reminder.").await
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_handler_commands() {
        let handler = ReminderHandler;
        let names = handler.command_names();

        assert!(names.contains(&"set_reminder"));
        assert!(names.contains(&"remove_reminder"));
        assert_eq!(names.len(), 2);
    }
}
