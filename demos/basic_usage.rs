//! Basic logger usage example
//!
//! Routes a few events to a temporary logs folder, prints where each one
//! landed, then logs a fatal error which interrupts the process.
//!
//! Run with: cargo run --example basic_usage

use rust_routed_logger::prelude::*;
use rust_routed_logger::{info, sql};

fn main() -> Result<()> {
    println!("=== Rust Routed Logger - Basic Usage Example ===\n");

    let logs = std::env::temp_dir().join("rust_routed_logger_demo");
    let logger = Logger::builder()
        .path(&logs)
        .catch_global_exceptions(true)
        .build()?;

    println!("1. Logging to every route:");
    logger.log(Severity::default(), "default log")?;
    logger.debug("debug log")?;
    logger.info("info log")?;
    logger.warning("warning log")?;
    logger.error("error log")?;

    println!("\n2. Quiet routes, shown on the console for this call only:");
    let loud = LogOverrides::new().write_to_console(true);
    logger.log_with(Severity::Message, "message log", &loud)?;
    logger.log_with(Severity::Webserver, "webserver log", &loud)?;
    logger.log_with(Severity::Sql, "sql log", &loud)?;

    println!("\n3. Macros and headings:");
    logger.head(Severity::Info, "Section", None)?;
    info!(logger, "Listening on port {}", 8080)?;
    sql!(logger, "SELECT * FROM users WHERE id = {}", 42)?;

    println!("\n4. Uncaught panic in a worker thread:");
    let _ = std::thread::spawn(|| panic!("worker crashed")).join();

    println!("\nFiles under {}:", logs.display());
    for file in logger.paths().all_file_paths(&rust_routed_logger::core::timestamp::date_only())? {
        if file.exists() {
            println!("   {}", file.display());
        }
    }

    println!("\n5. Fatal error (interrupts the process):");
    logger.fatal("fatal log")?;

    Ok(())
}
