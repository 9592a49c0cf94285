use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Ten entries of short strings never come close; anything bigger is not ours
pub const MAX_HISTORY_FILE_BYTES: u64 = 1024 * 1024;

/// Validates that a file's size is within acceptable limits (1MB)
///
/// Takes an open file handle so the size check and the subsequent read see
/// the same file.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 1MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_HISTORY_FILE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_HISTORY_FILE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use isochrone_viewer::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.local/share/isochrone-viewer");
/// // Returns "~/.local/share/isochrone-viewer" if HOME=/home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    path.to_string_lossy().into_owned()
}
