use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use trinket::commands::handlers::create_all_handlers;
use trinket::commands::{register_global_commands, register_guild_commands};
use trinket::core::Config;
use trinket::twitch::TwitchClient;
use trinket::{CommandContext, CommandRegistry};

/// HTTP request timeout for general outbound calls (seconds)
const HTTP_TIMEOUT_SECS: u64 = 30;

struct Handler {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(registry: CommandRegistry, context: CommandContext, guild_id: Option<GuildId>) -> Self {
        Handler {
            registry,
            context: Arc::new(context),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        // Guild-scoped registration propagates instantly, so prefer it for
        // development; global registration can take up to an hour
        let result = match self.guild_id {
            Some(guild_id) => register_guild_commands(&ctx, guild_id).await,
            None => register_global_commands(&ctx).await,
        };

        if let Err(e) = result {
            error!("Failed to register slash commands: {e}");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            let Some(handler) = self.registry.get(command.data.name.as_str()) else {
                warn!("No handler registered for command '{}'", command.data.name);
                return;
            };

            if let Err(e) = handler
                .handle(Arc::clone(&self.context), &ctx, &command)
                .await
            {
                error!(
                    "Error handling slash command '{}': {}",
                    command.data.name, e
                );

                let error_message =
                    "❌ Sorry, that service seems to be temporarily unavailable. Please try again in a moment.";

                // Try to edit the deferred response, fallback to a fresh
                // response if the command failed before deferring
                #[allow(clippy::redundant_pattern_matching)]
                if let Err(_) = command
                    .edit_original_interaction_response(&ctx.http, |response| {
                        response.content(error_message)
                    })
                    .await
                {
                    let _ = command
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(serenity::model::application::interaction::InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| message.content(error_message))
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

    info!("Starting trinket bot...");

    let twitch = TwitchClient::connect(&config.twitch_client_id, &config.twitch_client_secret)
        .await
        .map_err(|e| {
            error!("Failed to initialize Twitch client: {e}");
            e
        })?;

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(concat!("trinket-bot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let context = CommandContext::new(Arc::new(twitch), http);

    let mut registry = CommandRegistry::new();
    for handler in create_all_handlers() {
        registry.register(handler);
    }

    // Parse guild ID if provided for development mode
    let guild_id = config
        .discord_guild_id
        .as_ref()
        .and_then(|id| id.parse::<u64>().ok())
        .map(GuildId);

    let handler = Handler::new(registry, context, guild_id);

    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

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
