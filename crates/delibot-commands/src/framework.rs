//! Poise framework setup and command registration logic.

use crate::convert::channel_id;
use delibot_config::Config;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot understands.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![crate::ping::ping(), crate::echo::echo()]
}

/// Framework options for the given configuration.
pub fn framework_options(config: &Config) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(config.prefix.clone()),
            mention_as_prefix: true,
            ..Default::default()
        },
        command_check: Some(|ctx| {
            Box::pin(async move {
                let allowed = channel_permitted(&ctx.data().config, ctx.channel_id());
                if !allowed {
                    debug!(
                        channel = %ctx.channel_id(),
                        command = %ctx.command().name,
                        "Ignoring command outside allowed channels"
                    );
                }
                Ok(allowed)
            })
        }),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}

/// Whether commands may run in the Discord channel `channel`.
pub fn channel_permitted(config: &Config, channel: serenity::ChannelId) -> bool {
    config.allows_channel(channel_id(channel))
}

/// Creates a new Poise framework.
pub fn create_framework(config: &Config) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options(config))
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up the framework: {error}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().name, "Command failed: {error}");
        }
        poise::FrameworkError::CommandCheckFailed { .. } => {}
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                warn!("Error while reporting a framework error: {e}");
            }
        }
    }
}
