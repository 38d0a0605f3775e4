//! Main logger implementation
//!
//! A [`Logger`] is the handle returned by setup. Every log call resolves its
//! parameters, builds one [`LogEvent`] and dispatches it synchronously:
//!
//! 1. console, when enabled (never fails)
//! 2. the shared main log, when enabled (failures are returned)
//! 3. the severity route, when it differs from the main log (failures are
//!    reported on stderr and swallowed)
//! 4. the termination hook, when requested, after all writes

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    exception_bridge,
    log_event::LogEvent,
    metrics::LoggerMetrics,
    params::{resolve, EffectiveLogParams, LogOverrides},
    paths::LogPaths,
    severity::Severity,
    template::render,
    termination::{self, TerminationHook},
    timestamp,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Decoration added by [`Logger::head`]
const HEAD_MARKER: &str = "***";

/// Handle to a configured logging facility
///
/// Cloning is cheap and every clone logs to the same destinations. Setup must
/// complete before the handle is shared between threads.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    config: LoggerConfig,
    paths: LogPaths,
    console: ConsoleAppender,
    files: FileAppender,
    metrics: LoggerMetrics,
    on_terminate: TerminationHook,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.inner.config)
            .field("metrics", &self.inner.metrics)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Validate `config`, create the log folders and return the handle
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_routed_logger::{Logger, LoggerConfig};
    ///
    /// let logger = Logger::setup(LoggerConfig::new("/var/log/my-app")).unwrap();
    /// logger.info("Server started").unwrap();
    /// ```
    pub fn setup(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.inner.config
    }

    pub fn paths(&self) -> &LogPaths {
        &self.inner.paths
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    pub(crate) fn console(&self) -> &ConsoleAppender {
        &self.inner.console
    }

    /// Effective parameters a call with `severity` and `overrides` would use
    pub fn resolve(&self, severity: Severity, overrides: Option<&LogOverrides>) -> EffectiveLogParams {
        resolve(severity, overrides)
    }

    /// Path of today's main log
    pub fn main_log_path(&self) -> Result<PathBuf> {
        self.inner.paths.main_log_path(&timestamp::date_only())
    }

    /// Path of today's route for `severity`
    pub fn route_path(&self, severity: Severity) -> Result<PathBuf> {
        self.inner
            .paths
            .file_path(&resolve(severity, None).file_name_template, &timestamp::date_only())
    }

    pub fn log(&self, severity: Severity, message: impl Into<String>) -> Result<()> {
        self.dispatch(severity, Value::String(message.into()), None)
    }

    /// Log with per-call overrides layered over the severity's registry entry
    pub fn log_with(
        &self,
        severity: Severity,
        message: impl Into<String>,
        overrides: &LogOverrides,
    ) -> Result<()> {
        self.dispatch(severity, Value::String(message.into()), Some(overrides))
    }

    /// Log a structured payload
    ///
    /// String payloads go through the message template like [`Self::log`];
    /// any other JSON value is recorded as-is.
    pub fn log_value(
        &self,
        severity: Severity,
        content: Value,
        overrides: Option<&LogOverrides>,
    ) -> Result<()> {
        self.dispatch(severity, content, overrides)
    }

    /// Log `text` wrapped in a heading marker (`***text***`)
    pub fn head(
        &self,
        severity: Severity,
        text: impl AsRef<str>,
        overrides: Option<&LogOverrides>,
    ) -> Result<()> {
        let message = format!("{}{}{}", HEAD_MARKER, text.as_ref(), HEAD_MARKER);
        self.dispatch(severity, Value::String(message), overrides)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Info, message)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Warning, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Error, message)
    }

    /// Log a fatal error, then run the termination hook
    #[inline]
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::FatalError, message)
    }

    #[inline]
    pub fn msg(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Message, message)
    }

    #[inline]
    pub fn webserver(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Webserver, message)
    }

    #[inline]
    pub fn sql(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Sql, message)
    }

    fn dispatch(
        &self,
        severity: Severity,
        content: Value,
        overrides: Option<&LogOverrides>,
    ) -> Result<()> {
        let inner = &self.inner;
        let params = resolve(severity, overrides);

        let now = timestamp::now(inner.config.timestamp_millis);
        let date = timestamp::date_of(&now);
        // Both paths are checked before anything is written
        let main_path = inner.paths.main_log_path(date)?;
        let route_path = inner.paths.file_path(&params.file_name_template, date)?;

        let content = match content {
            Value::String(message) => {
                Value::String(render(&params.message_template, [("message", message.as_str())]))
            }
            structured => structured,
        };
        let event = LogEvent::new(now, severity, content);
        let line = event.to_line()?;
        inner.metrics.record_logged();

        if params.write_to_console {
            inner.console.write_event(&line, params.console_color);
        }

        let main_result = if params.write_to_main_log {
            inner.files.append_line(&main_path, &line).map_err(|e| {
                inner.metrics.record_main_log_failure();
                LoggerError::main_log_write(&main_path, e)
            })
        } else {
            Ok(())
        };

        if route_path != main_path {
            if let Err(e) = inner.files.append_line(&route_path, &line) {
                inner.metrics.record_unsaved();
                let path = route_path.display().to_string();
                inner.console.report_unsaved(
                    &format!("{:?}", e.kind()),
                    &format!("{} while saving: {}", e, line),
                    Some(path.as_str()),
                );
            }
        }

        if params.terminate_process {
            (inner.on_terminate)(severity);
        }

        main_result
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use rust_routed_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .path("/var/log/my-app")
///     .file_extension("txt")
///     .catch_global_exceptions(true)
///     .on_terminate(Arc::new(|severity| {
///         eprintln!("{} logged, shutting down", severity);
///         std::process::exit(1);
///     }))
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    path: Option<PathBuf>,
    file_extension: Option<String>,
    catch_global_exceptions: bool,
    timestamp_millis: bool,
    console: Option<ConsoleAppender>,
    on_terminate: Option<TerminationHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            path: None,
            file_extension: None,
            catch_global_exceptions: false,
            timestamp_millis: true,
            console: None,
            on_terminate: None,
        }
    }

    /// Take every setup parameter from `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.path = Some(config.path);
        self.file_extension = Some(config.file_extension);
        self.catch_global_exceptions = config.catch_global_exceptions;
        self.timestamp_millis = config.timestamp_millis;
        self
    }

    /// Absolute base folder of every log file (required)
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = Some(extension.into());
        self
    }

    /// Log uncaught panics with severity `uncaught exception`
    #[must_use = "builder methods return a new value"]
    pub fn catch_global_exceptions(mut self, enabled: bool) -> Self {
        self.catch_global_exceptions = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_millis(mut self, enabled: bool) -> Self {
        self.timestamp_millis = enabled;
        self
    }

    /// Replace the stdout/stderr console appender
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    /// Replace the default process interrupt run after fatal events
    #[must_use = "builder methods return a new value"]
    pub fn on_terminate(mut self, hook: TerminationHook) -> Self {
        self.on_terminate = Some(hook);
        self
    }

    /// Validate, provision folders and build the Logger
    pub fn build(self) -> Result<Logger> {
        let path = self
            .path
            .ok_or_else(|| LoggerError::config("LoggerConfig", "base folder where to save logs is missing"))?;
        let mut config = LoggerConfig::new(path);
        if let Some(extension) = self.file_extension {
            config.file_extension = extension;
        }
        config.catch_global_exceptions = self.catch_global_exceptions;
        config.timestamp_millis = self.timestamp_millis;
        config.validate()?;

        let paths = LogPaths::new(config.path.clone(), config.file_extension.clone());
        let console = self.console.unwrap_or_default();
        for folder in paths.ensure_folders()? {
            console.notice(&format!(
                "(Log) Folder \"{}\" was missing - created new.",
                folder.display()
            ));
        }

        let logger = Logger {
            inner: Arc::new(LoggerInner {
                config,
                paths,
                console,
                files: FileAppender::new(),
                metrics: LoggerMetrics::new(),
                on_terminate: self.on_terminate.unwrap_or_else(termination::default_hook),
            }),
        };

        if logger.inner.config.catch_global_exceptions {
            exception_bridge::install(&logger);
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
