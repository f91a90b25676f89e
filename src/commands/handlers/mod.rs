//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial handlers for study, progress, and reminder commands

pub mod progress;
pub mod reminder;
pub mod study;

use std::sync::Arc;

use anyhow::Result;
use serenity::builder::CreateEmbed;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(study::StudyHandler),
        Arc::new(progress::ProgressHandler),
        Arc::new(reminder::ReminderHandler),
    ]
}

/// Reply to an interaction with an ephemeral embed.
pub(crate) async fn reply_embed(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    embed: CreateEmbed,
) -> Result<()> {
    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|msg| msg.ephemeral(true).add_embed(embed))
        })
        .await?;
    Ok(())
}

/// Reply to an interaction with an ephemeral text message.
pub(crate) async fn reply_text(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|msg| msg.ephemeral(true).content(content))
        })
        .await?;
    Ok(())
}
