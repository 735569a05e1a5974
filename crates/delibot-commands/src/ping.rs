//! Ping command used to check that the bot is alive.

use crate::framework::{Context, Error};

/// Reply shown by `ping`.
pub const PONG: &str = "¡Pong!";

/// Replies with a pong.
#[poise::command(prefix_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(PONG).await?;
    Ok(())
}
