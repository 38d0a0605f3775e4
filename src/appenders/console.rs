//! Console appender implementation
//!
//! Records go to stdout, optionally wrapped in the route's color. stderr is
//! the fallback channel for everything the sink could not save. Write
//! failures on either stream are ignored.

use crate::core::{timestamp, ConsoleColor, Severity};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Tag appended to console-only diagnostics
pub const NOT_SAVED_TAG: &str = "This message is not saved";

enum Output {
    Std,
    Memory(ConsoleCapture),
}

pub struct ConsoleAppender {
    use_colors: bool,
    output: Output,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            output: Output::Std,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            output: Output::Std,
        }
    }

    /// Appender that keeps every line in memory instead of printing it
    ///
    /// # Example
    ///
    /// ```
    /// use rust_routed_logger::appenders::ConsoleAppender;
    /// use rust_routed_logger::ConsoleColor;
    ///
    /// let (console, capture) = ConsoleAppender::captured();
    /// console.write_event(r#"{"content":"hello"}"#, ConsoleColor::Red);
    /// assert_eq!(capture.stdout_lines(), vec![r#"{"content":"hello"}"#.to_string()]);
    /// ```
    pub fn captured() -> (Self, ConsoleCapture) {
        let capture = ConsoleCapture::default();
        let appender = Self {
            use_colors: false,
            output: Output::Memory(capture.clone()),
        };
        (appender, capture)
    }

    /// Print one serialized record
    pub fn write_event(&self, line: &str, color: ConsoleColor) {
        match (self.use_colors, color.color_code()) {
            (true, Some(code)) => self.stdout(&line.color(code).to_string()),
            _ => self.stdout(line),
        }
    }

    /// Print on stderr an operational notice that is not part of any log file
    pub fn notice(&self, text: &str) {
        self.stderr(&format!("{} [{}]", text, NOT_SAVED_TAG));
    }

    /// Report on stderr an event the sink failed to save
    ///
    /// The report is itself a record, with severity `error` and the failure
    /// details as content.
    pub fn report_unsaved(&self, name: &str, message: &str, path: Option<&str>) {
        let mut content = serde_json::json!({
            "info": NOT_SAVED_TAG,
            "name": name,
            "message": message,
        });
        if let Some(path) = path {
            content["path"] = serde_json::Value::String(path.to_string());
        }
        let report = serde_json::json!({
            "datetime": timestamp::now(true),
            "severity": Severity::Error,
            "content": content,
        });

        let line = report.to_string();
        if self.use_colors {
            self.stderr(&line.red().to_string());
        } else {
            self.stderr(&line);
        }
    }

    fn stdout(&self, text: &str) {
        match &self.output {
            Output::Std => {
                let _ = writeln!(std::io::stdout().lock(), "{}", text);
            }
            Output::Memory(capture) => capture.stdout.lock().push(text.to_string()),
        }
    }

    fn stderr(&self, text: &str) {
        match &self.output {
            Output::Std => {
                let _ = writeln!(std::io::stderr().lock(), "{}", text);
            }
            Output::Memory(capture) => capture.stderr.lock().push(text.to_string()),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines collected by a [`ConsoleAppender::captured`] appender
#[derive(Debug, Clone, Default)]
pub struct ConsoleCapture {
    stdout: Arc<Mutex<Vec<String>>>,
    stderr: Arc<Mutex<Vec<String>>>,
}

impl ConsoleCapture {
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lock().clone()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.stderr.lock().clone()
    }

    /// Forget everything captured so far
    pub fn clear(&self) {
        self.stdout.lock().clear();
        self.stderr.lock().clear();
    }
}
