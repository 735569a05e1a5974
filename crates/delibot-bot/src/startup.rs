//! Startup wiring: where the configuration comes from.

use delibot_config::{Config, ConfigLoader, ConfigResult, CONFIG_PATH_VAR};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A JSON file.
    File(PathBuf),
    /// `DISCORD_TOKEN`, `PREFIX` and friends.
    Environment,
}

impl ConfigSource {
    /// Picks the source from `DELIBOT_CONFIG`. Relative paths are resolved
    /// against `root`.
    pub fn detect<F>(root: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(CONFIG_PATH_VAR).map(|p| p.trim().to_string()) {
            Some(path) if !path.is_empty() => Self::File(root.join(path)),
            _ => Self::Environment,
        }
    }

    /// Loads the configuration from this source.
    pub fn load(&self) -> ConfigResult<Config> {
        match self {
            Self::File(path) => ConfigLoader::new(path).load(),
            Self::Environment => Config::from_env(),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Environment => f.write_str("environment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_without_variable() {
        let source = ConfigSource::detect(Path::new("/srv/delibot"), |_| None);
        assert_eq!(source, ConfigSource::Environment);

        let source = ConfigSource::detect(Path::new("/srv/delibot"), |_| Some("  ".into()));
        assert_eq!(source, ConfigSource::Environment);
    }

    #[test]
    fn test_detect_resolves_relative_paths() {
        let source =
            ConfigSource::detect(Path::new("/srv/delibot"), |_| Some("config.json".into()));
        assert_eq!(
            source,
            ConfigSource::File(PathBuf::from("/srv/delibot/config.json"))
        );
    }

    #[test]
    fn test_detect_keeps_absolute_paths() {
        let source =
            ConfigSource::detect(Path::new("/srv/delibot"), |_| Some("/etc/delibot.json".into()));
        assert_eq!(source, ConfigSource::File(PathBuf::from("/etc/delibot.json")));
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigSource::Environment.to_string(), "environment");
        assert_eq!(
            ConfigSource::File(PathBuf::from("/a/b.json")).to_string(),
            "file /a/b.json"
        );
    }
}
