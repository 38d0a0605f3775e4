//! Panic capture when the logger itself cannot save the panic
//!
//! The panic hook is process-wide, so this binary holds a single test.

use rust_routed_logger::appenders::ConsoleAppender;
use rust_routed_logger::prelude::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_failed_panic_log_is_reported_not_rethrown() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (console, capture) = ConsoleAppender::captured();
    let logger = Logger::builder()
        .path(temp_dir.path())
        .console(console)
        .catch_global_exceptions(true)
        .on_terminate(Arc::new(|_| {}))
        .build()
        .expect("Failed to set up logger");
    capture.clear();

    // the main log cannot be opened as a file
    fs::create_dir(logger.main_log_path().unwrap()).unwrap();

    let worker = std::thread::spawn(|| panic!("worker crashed"));
    assert!(worker.join().is_err());

    let reports = capture.stderr_lines();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("This message is not saved"));
    assert!(reports[0].contains("Error while catching uncaught panic"));

    assert_eq!(logger.metrics().bridge_failures(), 1);
    assert_eq!(logger.metrics().main_log_failures(), 1);

    // the route still keeps the panic
    let route = logger.route_path(Severity::UncaughtException).unwrap();
    let content = fs::read_to_string(route).expect("Exception log written");
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("worker crashed"));
}
