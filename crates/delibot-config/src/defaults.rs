//! Default values for optional configuration fields.

/// Command prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "!";

/// Environment variable naming a JSON configuration file.
pub const CONFIG_PATH_VAR: &str = "DELIBOT_CONFIG";

/// Name of the dotenv file read from the project root.
pub const ENV_FILE_NAME: &str = "discord.env";
