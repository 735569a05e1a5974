//! JSON configuration loading.

use crate::defaults::DEFAULT_PREFIX;
use crate::error::{ConfigError, ConfigResult};
use crate::schema::{parse_id, Config};
use delibot_common::{ChannelId, GuildId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An identifier written either as a JSON integer or as an integer-like string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn resolve(self, field: &'static str) -> ConfigResult<u64> {
        match self {
            Self::Number(id) => Ok(id),
            Self::Text(text) => parse_id(field, &text),
        }
    }
}

/// Configuration loader bound to one file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration file.
    pub fn load(&self) -> ConfigResult<Config> {
        load_config(&self.path)
    }
}

/// Reads and validates the JSON configuration at `path`.
///
/// The whole file is read and parsed in one go; any failure aborts the load.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let config = parse_config(&text)?;
    debug!(
        path = %path.display(),
        allowed_channels = config.allowed_channels.len(),
        "Loaded configuration"
    );
    Ok(config)
}

/// Parses a JSON configuration document. Unknown keys are ignored.
pub fn parse_config(text: &str) -> ConfigResult<Config> {
    let value: Value = serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(ConfigError::Parse(
            "configuration root must be a JSON object".to_string(),
        ));
    };

    let token: String =
        optional_field(&fields, "token")?.ok_or(ConfigError::MissingField("token"))?;

    let prefix = optional_field::<String>(&fields, "prefix")?
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

    let allowed_channels: HashSet<ChannelId> =
        optional_field::<Vec<RawId>>(&fields, "allowed_channels")?
            .unwrap_or_default()
            .into_iter()
            .map(|raw| raw.resolve("allowed_channels").map(ChannelId))
            .collect::<ConfigResult<_>>()?;

    let guild_id = optional_field::<RawId>(&fields, "guild_id")?
        .map(|raw| raw.resolve("guild_id").map(GuildId))
        .transpose()?;

    let config = Config {
        token,
        prefix,
        allowed_channels,
        guild_id,
    };
    config.validate()?;
    Ok(config)
}

/// Decodes `name` from `fields`; absent and `null` both mean "not set".
fn optional_field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    name: &'static str,
) -> ConfigResult<Option<T>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| ConfigError::invalid(name, e.to_string())),
    }
}
