use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{AuthlogError, Result};

/// Top-level configuration read from `config.toml` in the data
/// directory. Every section has working defaults; an absent file is not
/// an error, since recording must work on a machine nobody configured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogSection,
    pub display: DisplaySection,
}

impl AppConfig {
    /// Load `{data_dir}/config.toml`, falling back to defaults when the
    /// file is absent.
    ///
    /// After parsing, validates the log filename to prevent path
    /// traversal from a compromised config file.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AuthlogError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;

        crate::cli::context::validate_simple_filename(&config.log.file, "log file")?;
        if config.log.chunk_size == 0 {
            return Err(AuthlogError::InvalidConfig {
                detail: "log.chunk_size must be at least 1".into(),
            });
        }

        Ok(config)
    }
}

/// The `[log]` section: where records live and how they are scanned.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// File name inside the data directory.
    pub file: String,
    /// Bytes read per step of the backward scan.
    pub chunk_size: u64,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            file: "authlog.log".to_string(),
            chunk_size: 8192,
        }
    }
}

/// The `[display]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// strftime-style format for human-readable timestamps, both in the
    /// log file's second column and in the table view.
    pub date_format: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            date_format: "%Y/%m/%d %H:%M".to_string(),
        }
    }
}
