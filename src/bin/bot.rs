use anyhow::{Context as _, Result};
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use studybud::commands::{
    register_global_commands, register_guild_commands, CommandContext, CommandHandler,
};
use studybud::core::Config;
use studybud::features::reminders::scheduler::DiscordNotifier;
use studybud::features::reminders::{parse_hh_mm, ReminderRegistry};
use studybud::{ReminderScheduler, SchedulerConfig};

struct Handler {
    command_handler: Arc<CommandHandler>,
    guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Register slash commands - guild commands for development (instant),
        // global for production
        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx).await {
                error!("❌ Failed to register global slash commands: {e}");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            if let Err(e) = self
                .command_handler
                .handle_slash_command(&ctx, &command)
                .await
            {
                error!(
                    "Error handling slash command '{}': {}",
                    command.data.name, e
                );

                let error_message =
                    "❌ Sorry, I encountered an error processing your command. Please try again.";

                // Respond if we haven't yet, otherwise edit whatever went out
                #[allow(clippy::redundant_pattern_matching)]
                if let Err(_) = command
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.ephemeral(true).content(error_message)
                            })
                    })
                    .await
                {
                    let _ = command
                        .edit_original_interaction_response(&ctx.http, |response| {
                            response.content(error_message)
                        })
                        .await;
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting StudyBud Discord bot...");

    let context = CommandContext::from_data_dir(&config.data_dir);
    let registry: ReminderRegistry = context.reminders.clone();
    let command_handler = CommandHandler::new(context);

    // Guild-scoped registration for development mode, validated at config load
    let guild_id = config.discord_guild_id.map(GuildId);

    let handler = Handler {
        command_handler: Arc::new(command_handler),
        guild_id,
    };

    let intents = GatewayIntents::GUILDS | GatewayIntents::DIRECT_MESSAGES;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Start the reminder scheduler
    let daily_time = parse_hh_mm(&config.daily_broadcast_time)
        .map_err(|e| anyhow::anyhow!("DAILY_BROADCAST_TIME: {e}"))?;
    let scheduler_config =
        SchedulerConfig::new(config.utc_offset_hours, daily_time, config.reminder_channel_id)
            .context("invalid scheduler configuration")?;
    let scheduler = ReminderScheduler::new(&registry, scheduler_config);
    let notifier = Arc::new(DiscordNotifier::new(client.cache_and_http.http.clone()));
    tokio::spawn(async move {
        scheduler.run(notifier).await;
    });

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
