//! Core logger types

pub mod config;
pub mod error;
pub mod exception_bridge;
pub mod global;
pub mod log_event;
pub mod logger;
pub mod metrics;
pub mod params;
pub mod paths;
pub mod severity;
pub mod severity_config;
pub mod template;
pub mod termination;
pub mod timestamp;

pub use config::{LoggerConfig, DEFAULT_FILE_EXTENSION};
pub use error::{LoggerError, Result};
pub use global::{global, init_global, set_global};
pub use log_event::LogEvent;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use params::{resolve, resolve_named, EffectiveLogParams, LogOverrides};
pub use paths::LogPaths;
pub use severity::{ConsoleColor, Severity};
pub use severity_config::SeverityConfig;
pub use termination::{interrupt_process, TerminationHook};
