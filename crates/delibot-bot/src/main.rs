//! Main entry point for Delibot.

use anyhow::Context as _;
use delibot_bot::{ConfigSource, DelibotBot};
use delibot_common::{init_logging, project_root_or_cwd, LoggingConfig, DEFAULT_ROOT_MARKER};
use delibot_config::{load_env_file, ENV_FILE_NAME};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let root =
        project_root_or_cwd(DEFAULT_ROOT_MARKER).context("Failed to resolve project root")?;

    // discord.env must be loaded before LOG_LEVEL is read
    let env_loaded = load_env_file(&root.join(ENV_FILE_NAME));

    let _log_guard =
        init_logging(&LoggingConfig::for_root(&root)).context("Failed to initialise logging")?;

    info!("Starting Delibot...");
    info!(root = %root.display(), env_file = env_loaded, "Resolved project root");

    let source = ConfigSource::detect(&root, |key| std::env::var(key).ok());
    let config = source
        .load()
        .with_context(|| format!("Failed to load configuration from {source}"))?;
    info!(source = %source, prefix = %config.prefix, "Configuration loaded");

    let bot = DelibotBot::new(config);
    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {}", e);
        return Err(e.into());
    }

    Ok(())
}
