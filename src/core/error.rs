//! Error types for the logger system

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Severity name that is not part of the registry
    #[error("Unknown severity: '{0}'")]
    UnknownSeverity(String),

    /// Logging attempted through the process-wide handle before setup
    #[error("Logger is not initialized. Run setup with an absolute logs path first")]
    NotInitialized,

    /// Process-wide handle installed twice
    #[error("Logger is already initialized")]
    AlreadyInitialized,

    /// Log folder could not be created during setup
    #[error("Error while creating folder '{}' to log: {source}", path.display())]
    FolderProvision {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Append to the shared main log failed
    #[error("Failed to append to main log '{}': {source}", path.display())]
    MainLogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a folder provisioning error
    pub fn folder_provision(path: &Path, source: std::io::Error) -> Self {
        LoggerError::FolderProvision {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a main log write error
    pub fn main_log_write(path: &Path, source: std::io::Error) -> Self {
        LoggerError::MainLogWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error belongs to the configuration class (bad setup
    /// parameters, bad overrides, unknown severity)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. } | LoggerError::UnknownSeverity(_)
        )
    }
}
