//! Project root discovery.

use crate::types::{DelibotError, Result};
use std::path::{Path, PathBuf};

/// File whose presence marks the project root.
pub const DEFAULT_ROOT_MARKER: &str = "Cargo.toml";

/// Returns the first directory, starting at `start` and walking up, that
/// contains a file named `marker`.
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| DelibotError::RootNotFound {
            marker: marker.to_string(),
            start: start.to_path_buf(),
        })
}

/// Resolves the project root from the current directory, falling back to the
/// current directory itself when no marker is found.
pub fn project_root_or_cwd(marker: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(find_project_root(&cwd, marker).unwrap_or(cwd))
}
