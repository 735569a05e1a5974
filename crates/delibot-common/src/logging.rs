//! Structured logging infrastructure for Delibot.
//!
//! Events go to stdout and to a daily-rotated file under `<root>/logs`.
//! The level comes from `LOG_LEVEL`; `RUST_LOG`, when set, replaces the
//! whole filter.

use crate::types::{DelibotError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable holding the application log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Base name of the rotated log file.
pub const LOG_FILE_NAME: &str = "delibot.log";

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to the workspace crates.
    pub level: LevelFilter,
    /// Directory holding the rotated log files.
    pub log_dir: PathBuf,
    /// Number of rotated files to keep.
    pub max_log_files: usize,
}

impl LoggingConfig {
    /// Logging under `<root>/logs` with the level read from `LOG_LEVEL`.
    pub fn for_root(root: &Path) -> Self {
        let level = std::env::var(LOG_LEVEL_VAR).ok();
        Self {
            level: coerce_level(level.as_deref()),
            log_dir: root.join("logs"),
            max_log_files: 7,
        }
    }
}

/// Maps a level name to a filter, defaulting to INFO for missing or unknown names.
pub fn coerce_level(level: Option<&str>) -> LevelFilter {
    let Some(level) = level.map(str::trim).filter(|l| !l.is_empty()) else {
        return LevelFilter::INFO;
    };

    match level.to_ascii_uppercase().as_str() {
        "CRITICAL" | "ERROR" => LevelFilter::ERROR,
        "WARNING" | "WARN" => LevelFilter::WARN,
        "INFO" => LevelFilter::INFO,
        "DEBUG" => LevelFilter::DEBUG,
        "NOTSET" | "TRACE" => LevelFilter::TRACE,
        _ => LevelFilter::INFO,
    }
}

/// Builds the event filter: `RUST_LOG` if present, otherwise the workspace
/// crates at `level` and everything else at WARN.
pub fn build_filter(level: LevelFilter) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(format!("warn,delibot={level}"))
        .map_err(|e| DelibotError::Logging(e.to_string()))
}

/// Creates the daily-rotating file appender, creating the directory if needed.
pub fn file_appender(config: &LoggingConfig) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(&config.log_dir)?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .max_log_files(config.max_log_files)
        .build(&config.log_dir)
        .map_err(|e| DelibotError::Logging(e.to_string()))
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let filter = build_filter(config.level)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(config)?);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(file_writer),
        )
        .try_init()
        .map_err(|e| DelibotError::Logging(e.to_string()))?;

    Ok(guard)
}
