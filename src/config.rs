//! Configuration file support for gitcontrib.
//!
//! The report layout can be tuned with a TOML file passed via `--config`.
//! Every key is optional; anything left out keeps the built-in default, so an
//! empty file renders exactly like no file at all.
//!
//! ```toml
//! bar_width = 60
//! name_width = 32
//! color = false
//! ```

use crate::error::{ContribError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Layout settings for the rendered histogram.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ReportConfig {
    /// Width of a full-length bar, in cells.
    pub bar_width: usize,

    /// Width of the contributor name column. Longer names are truncated.
    pub name_width: usize,

    /// Width of the numeric columns.
    pub value_width: usize,

    /// Emit ANSI colors on the bars.
    pub color: bool,

    /// Title shown in the banner.
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bar_width: 40,
            name_width: 27,
            value_width: 8,
            color: true,
            title: "Contribution Histogram".to_string(),
        }
    }
}

/// Load a report configuration from an explicit TOML file.
///
/// Unlike discovery-based loading, the path was named by the user, so a
/// missing file is an error rather than a fallback to defaults.
///
/// # Errors
///
/// Returns [`ContribError::ConfigError`] if the file cannot be read or is
/// not valid TOML for [`ReportConfig`].
pub fn load_config_from_path(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        ContribError::config_error_with_source(
            format!("Failed to read file: {}", e),
            path.into(),
            e,
        )
    })?;

    let config: ReportConfig = toml::from_str(&content).map_err(|e| {
        ContribError::config_error_with_source(
            format!("Failed to parse TOML: {}", e),
            path.into(),
            e,
        )
    })?;

    if config.bar_width == 0 {
        return Err(ContribError::config_error_with_path(
            "bar_width must be greater than zero",
            path.into(),
        ));
    }

    tracing::debug!(path = %path.display(), ?config, "Loaded report configuration");
    Ok(config)
}

/// Resolve the configuration to use for a run: the named file, or defaults.
pub fn load_config(config_path: Option<&Path>) -> Result<ReportConfig> {
    match config_path {
        Some(path) => load_config_from_path(path),
        None => Ok(ReportConfig::default()),
    }
}
