//! Core bot logic using the Poise framework.

use crate::diagnostics::report_guild;
use crate::error::BotResult;
use delibot_commands::{convert::to_serenity_guild, create_framework, Data};
use delibot_config::Config;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Main bot structure.
pub struct DelibotBot {
    config: Arc<Config>,
}

impl DelibotBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the bot runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gateway intents the bot needs. Message content is required for prefix
    /// commands.
    pub fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::non_privileged()
            | serenity::GatewayIntents::MESSAGE_CONTENT
            | serenity::GatewayIntents::GUILD_MEMBERS
    }

    /// Connects to Discord and runs until the gateway shuts down or Ctrl-C
    /// is received.
    pub async fn start(&self) -> BotResult<()> {
        self.config.validate()?;

        let config_clone = self.config.clone();
        let framework = create_framework(&self.config)
            .setup(move |ctx, ready, framework| {
                let config = config_clone.clone();
                Box::pin(async move {
                    info!("Connected as {}", ready.user.name);
                    debug!(
                        "Loaded commands: {:?}",
                        framework
                            .options()
                            .commands
                            .iter()
                            .map(|c| c.qualified_name.as_str())
                            .collect::<Vec<_>>()
                    );

                    if let Some(id) = config.guild_id {
                        match to_serenity_guild(id) {
                            Some(guild_id) => report_guild(ctx, ready.user.id, guild_id).await,
                            None => warn!(guild_id = %id, "Ignoring invalid guild id"),
                        }
                    }

                    Ok(Data { config })
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&self.config.token, Self::intents())
            .framework(framework)
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {:?}", e);
                return;
            }

            info!("Received shutdown signal, closing the gateway connection");
            shard_manager.shutdown_all().await;
        });

        client.start().await?;
        info!("Delibot has shut down");
        Ok(())
    }
}
