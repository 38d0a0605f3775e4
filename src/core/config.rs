//! Setup parameters
//!
//! Read once at setup and immutable afterwards.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default extension of every log file
pub const DEFAULT_FILE_EXTENSION: &str = "log";

const MAX_EXTENSION_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerConfig {
    /// Absolute base folder of every log file
    pub path: PathBuf,
    /// Extension appended to every rendered file name, without the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
    /// Install the panic hook that logs uncaught panics
    #[serde(default)]
    pub catch_global_exceptions: bool,
    /// Include milliseconds in record timestamps
    #[serde(default = "default_timestamp_millis")]
    pub timestamp_millis: bool,
}

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

fn default_timestamp_millis() -> bool {
    true
}

impl LoggerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_extension: default_file_extension(),
            catch_global_exceptions: false,
            timestamp_millis: default_timestamp_millis(),
        }
    }

    /// Decode setup parameters from JSON
    ///
    /// Missing or mistyped fields are configuration errors.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_routed_logger::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_json(r#"{"path": "/tmp/logs", "fileExtension": "txt"}"#).unwrap();
    /// assert_eq!(config.file_extension, "txt");
    /// assert!(!config.catch_global_exceptions);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)
            .map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the setup invariants without touching the filesystem
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() || !self.path.is_absolute() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!(
                    "base folder where to save logs has to be an absolute path, got '{}'",
                    self.path.display()
                ),
            ));
        }

        let extension_ok = (1..=MAX_EXTENSION_LEN).contains(&self.file_extension.len())
            && self.file_extension.chars().all(|c| c.is_ascii_alphanumeric());
        if !extension_ok {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!(
                    "file extension has to be 1 to {} ASCII letters or digits, got '{}'",
                    MAX_EXTENSION_LEN, self.file_extension
                ),
            ));
        }

        Ok(())
    }
}
