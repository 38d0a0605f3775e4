//! Per-call parameter resolution
//!
//! Effective parameters are built fresh for every log call by layering, field
//! by field: global defaults, then the severity registry entry, then the
//! caller's overrides.

use super::error::Result;
use super::severity::{ConsoleColor, Severity};
use serde::{Deserialize, Serialize};

/// File name template of the shared main log
pub const DEFAULT_FILE_NAME_TEMPLATE: &str = "{date}";

/// Message template that shows the message unchanged
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "{message}";

/// Caller-supplied overrides for a single log call
///
/// # Example
///
/// ```
/// use rust_routed_logger::core::params::{resolve, LogOverrides};
/// use rust_routed_logger::Severity;
///
/// let quiet = LogOverrides::new().write_to_console(false);
/// assert!(!resolve(Severity::Error, Some(&quiet)).write_to_console);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LogOverrides {
    pub file_name_template: Option<String>,
    pub message_template: Option<String>,
    pub write_to_main_log: Option<bool>,
    pub write_to_console: Option<bool>,
    pub console_color: Option<ConsoleColor>,
    pub terminate_process: Option<bool>,
}

impl LogOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode overrides from a JSON object with camelCase keys
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn file_name_template(mut self, template: impl Into<String>) -> Self {
        self.file_name_template = Some(template.into());
        self
    }

    #[must_use]
    pub fn message_template(mut self, template: impl Into<String>) -> Self {
        self.message_template = Some(template.into());
        self
    }

    #[must_use]
    pub fn write_to_main_log(mut self, enabled: bool) -> Self {
        self.write_to_main_log = Some(enabled);
        self
    }

    #[must_use]
    pub fn write_to_console(mut self, enabled: bool) -> Self {
        self.write_to_console = Some(enabled);
        self
    }

    #[must_use]
    pub fn console_color(mut self, color: ConsoleColor) -> Self {
        self.console_color = Some(color);
        self
    }

    #[must_use]
    pub fn terminate_process(mut self, enabled: bool) -> Self {
        self.terminate_process = Some(enabled);
        self
    }
}

/// Fully merged configuration for one log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveLogParams {
    pub severity: Severity,
    pub file_name_template: String,
    pub message_template: String,
    pub write_to_main_log: bool,
    pub write_to_console: bool,
    pub console_color: ConsoleColor,
    pub terminate_process: bool,
}

impl EffectiveLogParams {
    /// Global defaults, before any severity or caller override
    fn defaults(severity: Severity) -> Self {
        Self {
            severity,
            file_name_template: DEFAULT_FILE_NAME_TEMPLATE.to_string(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
            write_to_main_log: true,
            write_to_console: true,
            console_color: ConsoleColor::None,
            terminate_process: false,
        }
    }
}

/// Merge defaults, the registry entry for `severity` and `overrides`
pub fn resolve(severity: Severity, overrides: Option<&LogOverrides>) -> EffectiveLogParams {
    let mut params = EffectiveLogParams::defaults(severity);

    let registry = severity.config();
    if let Some(template) = registry.file_name_template {
        params.file_name_template = template.to_string();
    }
    if let Some(template) = registry.message_template {
        params.message_template = template.to_string();
    }
    if let Some(enabled) = registry.write_to_main_log {
        params.write_to_main_log = enabled;
    }
    if let Some(enabled) = registry.write_to_console {
        params.write_to_console = enabled;
    }
    if let Some(color) = registry.console_color {
        params.console_color = color;
    }
    if let Some(enabled) = registry.terminate_process {
        params.terminate_process = enabled;
    }

    if let Some(overrides) = overrides {
        if let Some(ref template) = overrides.file_name_template {
            params.file_name_template = template.clone();
        }
        if let Some(ref template) = overrides.message_template {
            params.message_template = template.clone();
        }
        if let Some(enabled) = overrides.write_to_main_log {
            params.write_to_main_log = enabled;
        }
        if let Some(enabled) = overrides.write_to_console {
            params.write_to_console = enabled;
        }
        if let Some(color) = overrides.console_color {
            params.console_color = color;
        }
        if let Some(enabled) = overrides.terminate_process {
            params.terminate_process = enabled;
        }
    }

    params
}

/// Resolve by severity name; unknown names are a configuration error
pub fn resolve_named(severity: &str, overrides: Option<&LogOverrides>) -> Result<EffectiveLogParams> {
    Ok(resolve(severity.parse()?, overrides))
}
