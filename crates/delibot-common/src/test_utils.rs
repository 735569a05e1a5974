//! Test utilities and shared test helpers for Delibot.
//!
//! This module provides fixtures and helper functions that can be used across
//! all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to a temporary file and return its handle.
#[cfg(feature = "tempfile")]
pub fn write_temp_file(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use crate::{ChannelId, GuildId, UserId};

    /// Create a test channel ID.
    pub const fn test_channel_id() -> ChannelId {
        ChannelId(123_456_789_012_345_678)
    }

    /// Create a test user ID.
    pub const fn test_user_id() -> UserId {
        UserId(987_654_321_098_765_432)
    }

    /// Create a test guild ID.
    pub const fn test_guild_id() -> GuildId {
        GuildId(111_222_333_444_555_666)
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// The smallest valid configuration.
    pub const fn minimal_config_json() -> &'static str {
        r#"{"token": "abc"}"#
    }

    /// A configuration using every supported key.
    pub const fn full_config_json() -> &'static str {
        r#"{
    "token": "test_token_full",
    "prefix": "?",
    "guild_id": "111222333444555666",
    "allowed_channels": ["5", 7, " 9 "],
    "unused_key": {"nested": true}
}"#
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::{ChannelId, UserId};
    use proptest::prelude::*;

    /// Strategy for generating valid Discord channel IDs.
    pub fn channel_id_strategy() -> impl Strategy<Value = ChannelId> {
        any::<u64>().prop_map(ChannelId)
    }

    /// Strategy for generating valid Discord user IDs.
    pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
        any::<u64>().prop_map(UserId)
    }

    /// Strategy for bot tokens: any non-empty string, whitespace and
    /// non-ASCII included.
    pub fn token_strategy() -> impl Strategy<Value = String> {
        any::<String>().prop_filter("token must be non-empty", |token| !token.is_empty())
    }
}
