//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to a
//! logger call and evaluates to its `Result<()>`.
//!
//! # Examples
//!
//! ```no_run
//! use rust_routed_logger::prelude::*;
//! use rust_routed_logger::{info, sql};
//!
//! let logger = Logger::setup(LoggerConfig::new("/var/log/my-app"))?;
//!
//! info!(logger, "Server started")?;
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! sql!(logger, "SELECT * FROM users WHERE id = {}", 42)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with an explicit severity.
///
/// # Examples
///
/// ```no_run
/// # use rust_routed_logger::prelude::*;
/// # let logger = Logger::setup(LoggerConfig::new("/var/log/my-app")).unwrap();
/// use rust_routed_logger::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal error. The logger's termination hook runs after the write.
///
/// # Examples
///
/// ```no_run
/// # use rust_routed_logger::prelude::*;
/// # let logger = Logger::setup(LoggerConfig::new("/var/log/my-app")).unwrap();
/// use rust_routed_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::FatalError, $($arg)+)
    };
}

/// Log to the `messages/` route.
#[macro_export]
macro_rules! msg {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Message, $($arg)+)
    };
}

/// Log to the `webserver/` route.
#[macro_export]
macro_rules! webserver {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Webserver, $($arg)+)
    };
}

/// Log to the `sql/` route.
#[macro_export]
macro_rules! sql {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Sql, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::ConsoleAppender;
    use crate::core::{LogEvent, Logger, Result, Severity};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_macros_route_like_methods() -> Result<()> {
        let dir = tempdir().unwrap();
        let (console, _capture) = ConsoleAppender::captured();
        let terminated = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&terminated);
        let logger = Logger::builder()
            .path(dir.path())
            .console(console)
            .on_terminate(Arc::new(move |_| flag.store(true, Ordering::SeqCst)))
            .build()?;

        log!(logger, Severity::Info, "Formatted: {}", 42)?;
        info!(logger, "Items: {}", 100)?;
        debug!(logger, "Count: {}", 5)?;
        warning!(logger, "Retry {} of {}", 1, 3)?;
        error!(logger, "Code: {}", 500)?;
        msg!(logger, "hello {}", "there")?;
        webserver!(logger, "GET /{}", "index.html")?;
        sql!(logger, "SELECT {}", 1)?;
        assert!(!terminated.load(Ordering::SeqCst));
        fatal!(logger, "Critical failure: {}", "system")?;
        assert!(terminated.load(Ordering::SeqCst));

        let main = std::fs::read_to_string(logger.main_log_path()?).unwrap();
        let first = LogEvent::from_line(main.lines().next().unwrap())?;
        assert_eq!(first.content, "Formatted: 42");

        let sql = std::fs::read_to_string(logger.route_path(Severity::Sql)?).unwrap();
        assert!(sql.contains("SELECT 1"));
        Ok(())
    }
}
