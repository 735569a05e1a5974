//! Conversions from serenity models to workspace types.

use delibot_common::{ChannelId, GuildId, UserId};
use poise::serenity_prelude as serenity;

/// Converts a serenity user id.
pub fn user_id(id: serenity::UserId) -> UserId {
    UserId(id.get())
}

/// Converts a serenity channel id.
pub fn channel_id(id: serenity::ChannelId) -> ChannelId {
    ChannelId(id.get())
}

/// Converts a workspace guild id for use with serenity. Discord never issues
/// id 0, so it yields `None`.
pub fn to_serenity_guild(id: GuildId) -> Option<serenity::GuildId> {
    (id.0 != 0).then(|| serenity::GuildId::new(id.0))
}
