//! Severity definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a log event. Controls routing and formatting through
/// the severity registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    #[serde(rename = "fatal error")]
    FatalError,
    #[serde(rename = "uncaught exception")]
    UncaughtException,
    Message,
    Webserver,
    Sql,
}

impl Severity {
    /// Every severity known to the registry
    pub const ALL: [Severity; 9] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::FatalError,
        Severity::UncaughtException,
        Severity::Message,
        Severity::Webserver,
        Severity::Sql,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::FatalError => "fatal error",
            Severity::UncaughtException => "uncaught exception",
            Severity::Message => "message",
            Severity::Webserver => "webserver",
            Severity::Sql => "sql",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal error" | "fatal" => Ok(Severity::FatalError),
            "uncaught exception" => Ok(Severity::UncaughtException),
            "message" | "msg" => Ok(Severity::Message),
            "webserver" => Ok(Severity::Webserver),
            "sql" => Ok(Severity::Sql),
            _ => Err(LoggerError::UnknownSeverity(s.to_string())),
        }
    }
}

/// Console color applied to the whole serialized record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleColor {
    #[default]
    None,
    Red,
    BrightRed,
    Yellow,
    Green,
    Blue,
    Magenta,
    Cyan,
}

impl ConsoleColor {
    pub fn color_code(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            ConsoleColor::None => None,
            ConsoleColor::Red => Some(Red),
            ConsoleColor::BrightRed => Some(BrightRed),
            ConsoleColor::Yellow => Some(Yellow),
            ConsoleColor::Green => Some(Green),
            ConsoleColor::Blue => Some(Blue),
            ConsoleColor::Magenta => Some(Magenta),
            ConsoleColor::Cyan => Some(Cyan),
        }
    }
}
