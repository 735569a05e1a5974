//! Configuration schema definitions.

use crate::defaults::DEFAULT_PREFIX;
use crate::error::{ConfigError, ConfigResult};
use delibot_common::{ChannelId, GuildId};
use std::collections::HashSet;
use std::fmt;

/// Main configuration structure for Delibot.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Discord bot token.
    pub token: String,
    /// Prefix that marks a message as a command.
    pub prefix: String,
    /// Channels where commands are handled. Empty means every channel.
    pub allowed_channels: HashSet<ChannelId>,
    /// Guild to inspect on startup.
    pub guild_id: Option<GuildId>,
}

impl Config {
    /// Creates a configuration with the given token and default settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            allowed_channels: HashSet::new(),
            guild_id: None,
        }
    }

    /// Replaces the command prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the allowed channel set.
    #[must_use]
    pub fn with_allowed_channels(mut self, channels: impl IntoIterator<Item = ChannelId>) -> Self {
        self.allowed_channels = channels.into_iter().collect();
        self
    }

    /// Sets the guild inspected on startup.
    #[must_use]
    pub fn with_guild_id(mut self, guild_id: GuildId) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Validates the configuration. Only an empty token is rejected; the
    /// token and prefix are otherwise kept exactly as given.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.token.is_empty() {
            return Err(ConfigError::MissingField("token"));
        }

        Ok(())
    }

    /// Whether commands may run in `channel`.
    pub fn allows_channel(&self, channel: ChannelId) -> bool {
        self.allowed_channels.is_empty() || self.allowed_channels.contains(&channel)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("allowed_channels", &self.allowed_channels)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

/// Parses an integer-like identifier, ignoring surrounding whitespace.
pub(crate) fn parse_id(field: &'static str, text: &str) -> ConfigResult<u64> {
    text.trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::invalid(field, format!("'{text}' is not an identifier: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new("abc");
        assert_eq!(config.prefix, "!");
        assert!(config.allowed_channels.is_empty());
        assert!(config.guild_id.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_token_fails_validation() {
        let err = Config::new("").validate().unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::MissingField);
    }

    #[test]
    fn test_whitespace_token_is_kept() {
        let config = Config::new("  ");
        assert!(config.validate().is_ok());
        assert_eq!(config.token, "  ");
    }

    #[test]
    fn test_empty_prefix_is_valid() {
        assert!(Config::new("abc").with_prefix("").validate().is_ok());
    }

    #[test]
    fn test_allows_channel() {
        let open = Config::new("abc");
        assert!(open.allows_channel(ChannelId(1)));

        let restricted = Config::new("abc").with_allowed_channels([ChannelId(5), ChannelId(7)]);
        assert!(restricted.allows_channel(ChannelId(5)));
        assert!(!restricted.allows_channel(ChannelId(6)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", Config::new("super-secret-token"));
        assert!(!rendered.contains("super-secret-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("allowed_channels", " 42 ").unwrap(), 42);
        assert!(parse_id("allowed_channels", "abc").is_err());
        assert!(parse_id("allowed_channels", "-1").is_err());
    }
}
