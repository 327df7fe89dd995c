use std::path::PathBuf;

use crate::core::errors::{AuthlogError, Result};

/// Resolve the data directory holding the log file and `config.toml`:
/// the `--data-dir` flag when given, otherwise `authlog/` inside the OS
/// cache directory. Resolved once at the edge and passed down; nothing
/// below the CLI reads ambient state.
pub fn resolve_data_dir(flag: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(PathBuf::from(dir));
    }
    dirs::cache_dir()
        .map(|d| d.join("authlog"))
        .ok_or_else(|| AuthlogError::InvalidConfig {
            detail: "Could not determine a cache directory; pass --data-dir".into(),
        })
}

/// Reject file names that could escape the data directory.
pub fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(AuthlogError::InvalidConfig {
            detail: format!("Invalid {what} '{name}': expected a plain file name"),
        });
    }
    Ok(())
}
