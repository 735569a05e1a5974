//! Startup diagnostics for the configured guild.
//!
//! Once connected, the bot looks up the configured guild and logs, per text
//! channel, whether it can see the channel, read its history and post in it.
//! Lookup failures are only logged.

use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use tracing::{info, warn};

/// Why the configured guild could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuildLookupFailure {
    /// Discord answered 403; the bot is probably not a member.
    Forbidden,
    /// Discord answered 404; the id is probably wrong.
    NotFound,
    /// Any other failure.
    Other(String),
}

impl GuildLookupFailure {
    /// Classifies a failed lookup from its HTTP status, if any.
    pub fn classify(status: Option<u16>, detail: impl Into<String>) -> Self {
        match status {
            Some(403) => Self::Forbidden,
            Some(404) => Self::NotFound,
            _ => Self::Other(detail.into()),
        }
    }

    fn from_error(error: &serenity::Error) -> Self {
        let status = match error {
            serenity::Error::Http(http) => http.status_code().map(|s| s.as_u16()),
            _ => None,
        };
        Self::classify(status, error.to_string())
    }

    fn log(&self, guild_id: serenity::GuildId) {
        match self {
            Self::Forbidden => {
                warn!(%guild_id, "Forbidden to fetch guild; is the bot in that server?");
            }
            Self::NotFound => warn!(%guild_id, "Guild not found; is the ID correct?"),
            Self::Other(detail) => warn!(%guild_id, "Error fetching guild: {detail}"),
        }
    }
}

/// What the bot may do in one text channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAccess {
    /// Channel name.
    pub name: String,
    /// Can see the channel.
    pub view: bool,
    /// Can read message history.
    pub read_history: bool,
    /// Can send messages.
    pub send: bool,
}

impl ChannelAccess {
    /// Summarises `permissions` for the channel called `name`.
    pub fn new(name: impl Into<String>, permissions: serenity::Permissions) -> Self {
        Self {
            name: name.into(),
            view: permissions.contains(serenity::Permissions::VIEW_CHANNEL),
            read_history: permissions.contains(serenity::Permissions::READ_MESSAGE_HISTORY),
            send: permissions.contains(serenity::Permissions::SEND_MESSAGES),
        }
    }
}

/// The resolved guild as far as the diagnostics care.
#[derive(Debug, Clone)]
pub struct GuildReport {
    /// Guild name.
    pub name: String,
    /// Guild id.
    pub id: serenity::GuildId,
    /// Access per text channel, sorted by name. Empty if the bot's own member
    /// could not be resolved.
    pub channels: Vec<ChannelAccess>,
}

impl GuildReport {
    fn log(&self) {
        for channel in &self.channels {
            info!(
                "[{}] view={}, read_history={}, send={}",
                channel.name, channel.view, channel.read_history, channel.send
            );
        }
        info!("Connected in server: {} (ID: {})", self.name, self.id);
    }
}

/// Resolves `guild_id` and logs the bot's channel access there.
pub async fn report_guild(
    ctx: &serenity::Context,
    bot_id: serenity::UserId,
    guild_id: serenity::GuildId,
) {
    match resolve_guild(ctx, bot_id, guild_id).await {
        Ok(report) => report.log(),
        Err(failure) => {
            failure.log(guild_id);
            warn!(%guild_id, "Configured guild could not be resolved");
        }
    }
}

/// Builds a [`GuildReport`], from the cache when possible and over HTTP
/// otherwise.
pub async fn resolve_guild(
    ctx: &serenity::Context,
    bot_id: serenity::UserId,
    guild_id: serenity::GuildId,
) -> Result<GuildReport, GuildLookupFailure> {
    if let Some(report) = report_from_cache(ctx, bot_id, guild_id) {
        return Ok(report);
    }

    let guild = ctx
        .http
        .get_guild(guild_id)
        .await
        .map_err(|e| GuildLookupFailure::from_error(&e))?;
    let channels = guild_id
        .channels(&ctx.http)
        .await
        .map_err(|e| GuildLookupFailure::from_error(&e))?;

    let access = match guild_id.member(ctx, bot_id).await {
        Ok(member) => text_channel_access(&channels, |channel| {
            guild.user_permissions_in(channel, &member)
        }),
        Err(e) => {
            warn!(%guild_id, "Could not fetch the bot's own member: {e}");
            Vec::new()
        }
    };

    Ok(GuildReport {
        name: guild.name.clone(),
        id: guild.id,
        channels: access,
    })
}

fn report_from_cache(
    ctx: &serenity::Context,
    bot_id: serenity::UserId,
    guild_id: serenity::GuildId,
) -> Option<GuildReport> {
    let guild = ctx.cache.guild(guild_id)?;
    let channels = guild.members.get(&bot_id).map_or_else(Vec::new, |member| {
        text_channel_access(&guild.channels, |channel| {
            guild.user_permissions_in(channel, member)
        })
    });

    Some(GuildReport {
        name: guild.name.clone(),
        id: guild.id,
        channels,
    })
}

fn text_channel_access<F>(
    channels: &HashMap<serenity::ChannelId, serenity::GuildChannel>,
    permissions_in: F,
) -> Vec<ChannelAccess>
where
    F: Fn(&serenity::GuildChannel) -> serenity::Permissions,
{
    let mut access: Vec<ChannelAccess> = channels
        .values()
        .filter(|channel| channel.kind == serenity::ChannelType::Text)
        .map(|channel| ChannelAccess::new(channel.name.clone(), permissions_in(channel)))
        .collect();
    access.sort_by(|a, b| a.name.cmp(&b.name));
    access
}
