//! Optional process-wide logger handle
//!
//! For code that cannot be handed a [`Logger`]. The handle is set once and
//! lives for the rest of the process; reading it before setup is an error.

use super::config::LoggerConfig;
use super::error::{LoggerError, Result};
use super::logger::Logger;
use parking_lot::Mutex;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();
// Held across setup so concurrent callers build at most one logger
static INIT: Mutex<()> = parking_lot::const_mutex(());

/// Set up a logger from `config` and install it as the process-wide handle
///
/// Concurrent callers are serialized: exactly one runs setup, the others get
/// [`LoggerError::AlreadyInitialized`] without touching disk or the panic hook.
pub fn init_global(config: LoggerConfig) -> Result<&'static Logger> {
    let _guard = INIT.lock();
    if GLOBAL.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    install(Logger::setup(config)?)
}

/// Install an already built logger as the process-wide handle
pub fn set_global(logger: Logger) -> Result<&'static Logger> {
    let _guard = INIT.lock();
    install(logger)
}

fn install(logger: Logger) -> Result<&'static Logger> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    global()
}

/// The process-wide handle
///
/// # Errors
///
/// [`LoggerError::NotInitialized`] until [`init_global`] or [`set_global`]
/// succeeded.
pub fn global() -> Result<&'static Logger> {
    GLOBAL.get().ok_or(LoggerError::NotInitialized)
}
