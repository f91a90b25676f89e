//! Top-level slash command dispatch
//!
//! Routes an incoming interaction to the handler registered for its command
//! name. Domain errors never reach this layer; anything that does bubble up
//! (store I/O, Discord API) is reported by the event handler in the binary.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::warn;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::handlers::create_all_handlers;
use crate::commands::{CommandContext, CommandRegistry};

/// Dispatches slash commands to their registered handlers.
#[derive(Clone)]
pub struct CommandHandler {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
}

impl CommandHandler {
    /// Build a dispatcher with every known handler registered.
    pub fn new(context: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        Self {
            registry,
            context: Arc::new(context),
        }
    }

    /// Handle one slash command interaction.
    pub async fn handle_slash_command(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let name = command.data.name.as_str();
        match self.registry.get(name) {
            Some(handler) => {
                handler
                    .handle(Arc::clone(&self.context), serenity_ctx, command)
                    .await
            }
            None => {
                warn!("received unregistered command: {name}");
                Ok(())
            }
        }
    }
}
