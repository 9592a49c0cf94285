use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory name under the platform data directory
pub const APP_DIR_NAME: &str = "isochrone-viewer";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ISOCHRONE_VIEWER_HOME";

/// Resolve where the history file lives
///
/// An explicit directory (from `--data-dir` or `ISOCHRONE_VIEWER_HOME`) wins;
/// otherwise the platform data directory is used:
/// - Linux: `~/.local/share/isochrone-viewer/`
/// - macOS: `~/Library/Application Support/isochrone-viewer/`
/// - Windows: `%APPDATA%\isochrone-viewer\`
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
