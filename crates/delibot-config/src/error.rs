//! Configuration error types.

use std::path::PathBuf;

/// Errors produced while loading a configuration. All of them are fatal to
/// startup.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a well-formed JSON object.
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// A required field is absent or empty.
    #[error("Missing required configuration field '{0}'")]
    MissingField(&'static str),

    /// A field is present but its value is unusable.
    #[error("Invalid value for configuration field '{field}': {reason}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// What was wrong with the value.
        reason: String,
    },
}

/// Coarse classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// See [`ConfigError::NotFound`].
    NotFound,
    /// See [`ConfigError::Io`].
    Io,
    /// See [`ConfigError::Parse`].
    Parse,
    /// See [`ConfigError::MissingField`].
    MissingField,
    /// See [`ConfigError::InvalidValue`].
    InvalidValue,
}

impl ConfigError {
    /// Returns the kind of this error.
    pub const fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::NotFound { .. } => ConfigErrorKind::NotFound,
            Self::Io { .. } => ConfigErrorKind::Io,
            Self::Parse(_) => ConfigErrorKind::Parse,
            Self::MissingField(_) => ConfigErrorKind::MissingField,
            Self::InvalidValue { .. } => ConfigErrorKind::InvalidValue,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
