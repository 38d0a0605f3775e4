//! Uncaught panic bridge
//!
//! Installs a process-wide panic hook that records every panic through the
//! logger with severity `uncaught exception`. The hook replaces any hook
//! installed before it. It must not panic itself (a panic inside a panic hook
//! aborts the process), so a failed log call is only reported on stderr.
//!
//! A panic hook runs before unwinding starts, so it cannot know whether the
//! panic will later be caught. Panics recovered by `std::panic::catch_unwind`
//! or by a runtime joining a failed task are recorded as `uncaught exception`
//! too.

use super::logger::Logger;
use super::severity::Severity;
use serde_json::{json, Value};
use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;

/// Route uncaught panics of every thread into `logger`
pub fn install(logger: &Logger) {
    let logger = logger.clone();
    std::panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_payload(panic_info, &Backtrace::force_capture());
        if let Err(e) = logger.log_value(Severity::UncaughtException, payload, None) {
            logger.metrics().record_bridge_failure();
            logger.console().report_unsaved(
                "LoggerError",
                &format!("(Log) Error while catching uncaught panic: {}", e),
                None,
            );
        }
    }));
}

/// Structured description of a panic: name, message, thread, location, stack
fn panic_payload(panic_info: &PanicHookInfo<'_>, backtrace: &Backtrace) -> Value {
    let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };

    let location = panic_info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));

    let stack: Vec<String> = backtrace
        .to_string()
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    json!({
        "name": "panic",
        "message": message,
        "thread": std::thread::current().name().unwrap_or("unnamed"),
        "location": location,
        "stack": stack,
    })
}
