//! Configuration from environment variables and `discord.env`.

use crate::defaults::DEFAULT_PREFIX;
use crate::error::{ConfigError, ConfigResult};
use crate::schema::{parse_id, Config};
use delibot_common::{ChannelId, GuildId};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Bot token variable.
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Command prefix variable.
pub const PREFIX_VAR: &str = "PREFIX";
/// Guild id variable.
pub const GUILD_ID_VAR: &str = "DISCORD_GUILD_ID";
/// Comma-separated allowed channel ids.
pub const ALLOWED_CHANNELS_VAR: &str = "ALLOWED_CHANNELS";

impl Config {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Values are trimmed. An empty `PREFIX` falls back to the default, and a
    /// `DISCORD_GUILD_ID` that is not all digits is ignored.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = var(TOKEN_VAR).ok_or(ConfigError::MissingField("token"))?;
        let prefix = var(PREFIX_VAR).unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let guild_id = var(GUILD_ID_VAR)
            .filter(|id| id.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|id| id.parse().ok())
            .map(GuildId);

        let allowed_channels: HashSet<ChannelId> = var(ALLOWED_CHANNELS_VAR)
            .map(|list| {
                list.split(',')
                    .filter(|entry| !entry.trim().is_empty())
                    .map(|entry| parse_id("allowed_channels", entry).map(ChannelId))
                    .collect::<ConfigResult<HashSet<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            token,
            prefix,
            allowed_channels,
            guild_id,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Loads `path` as a dotenv file without overriding variables that are
/// already set. Returns whether the file was found.
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded environment file");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable environment file");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_token_only() {
        let config = Config::from_lookup(lookup(&[(TOKEN_VAR, " abc ")])).unwrap();
        assert_eq!(config, Config::new("abc"));
    }

    #[test]
    fn test_missing_token() {
        let err = Config::from_lookup(lookup(&[(PREFIX_VAR, "?")])).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::MissingField);

        let err = Config::from_lookup(lookup(&[(TOKEN_VAR, "   ")])).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::MissingField);
    }

    #[test]
    fn test_prefix_and_guild() {
        let config = Config::from_lookup(lookup(&[
            (TOKEN_VAR, "abc"),
            (PREFIX_VAR, "$"),
            (GUILD_ID_VAR, "1234"),
        ]))
        .unwrap();
        assert_eq!(config.prefix, "$");
        assert_eq!(config.guild_id, Some(GuildId(1234)));
    }

    #[test]
    fn test_empty_prefix_uses_default() {
        let config = Config::from_lookup(lookup(&[(TOKEN_VAR, "abc"), (PREFIX_VAR, " ")])).unwrap();
        assert_eq!(config.prefix, DEFAULT_PREFIX);
    }

    #[test]
    fn test_non_digit_guild_is_ignored() {
        let config =
            Config::from_lookup(lookup(&[(TOKEN_VAR, "abc"), (GUILD_ID_VAR, "my-guild")])).unwrap();
        assert!(config.guild_id.is_none());
    }

    #[test]
    fn test_allowed_channels_list() {
        let config = Config::from_lookup(lookup(&[
            (TOKEN_VAR, "abc"),
            (ALLOWED_CHANNELS_VAR, "5, 7,,7"),
        ]))
        .unwrap();
        assert_eq!(
            config.allowed_channels,
            HashSet::from([ChannelId(5), ChannelId(7)])
        );

        let err = Config::from_lookup(lookup(&[
            (TOKEN_VAR, "abc"),
            (ALLOWED_CHANNELS_VAR, "5,general"),
        ]))
        .unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::InvalidValue);
    }

    #[test]
    fn test_missing_env_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!load_env_file(&tmp.path().join("discord.env")));
    }
}
