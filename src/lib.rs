//! # Rust Routed Logger
//!
//! A severity-routed logging facility. Each event is written synchronously to
//! the console, a shared daily main log and a severity-specific daily log,
//! according to a per-severity routing table.
//!
//! ## Features
//!
//! - **Severity Routing**: warnings, errors, debug, SQL, web server and
//!   message traffic each get their own daily file
//! - **Per-call Overrides**: any routing decision can be changed for one call
//! - **Failure Isolation**: a broken severity file never fails the caller
//! - **Fatal Errors**: fatal events interrupt the process after being saved
//! - **Panic Capture**: optional hook that logs uncaught panics
//!
//! ## Example
//!
//! ```no_run
//! use rust_routed_logger::prelude::*;
//!
//! let logger = Logger::setup(LoggerConfig::new("/var/log/my-app"))?;
//! logger.info("Server started")?;
//! logger.sql("SELECT * FROM users")?;
//! logger.log_with(Severity::Error, "retrying", &LogOverrides::new().write_to_console(false))?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::ConsoleAppender;
    pub use crate::core::{
        ConsoleColor, EffectiveLogParams, LogEvent, LogOverrides, LogPaths, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, Severity, TerminationHook,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    global, init_global, resolve, resolve_named, set_global, ConsoleColor, EffectiveLogParams,
    LogEvent, LogOverrides, LogPaths, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, Severity, SeverityConfig, TerminationHook,
};
