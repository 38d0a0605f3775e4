//! Process termination after fatal events

use super::severity::Severity;
use std::sync::Arc;

/// Invoked last by a log call whose parameters request termination, after
/// every destination has been written
pub type TerminationHook = Arc<dyn Fn(Severity) + Send + Sync>;

/// Default hook: interrupt the own process (SIGINT on unix)
pub fn interrupt_process(_severity: Severity) {
    #[cfg(unix)]
    {
        // SAFETY: kill/getpid have no memory-safety preconditions
        unsafe {
            libc::kill(libc::getpid(), libc::SIGINT);
        }
    }

    #[cfg(not(unix))]
    {
        // 128 + SIGINT, matching a shell-reported interrupt
        std::process::exit(130);
    }
}

pub(crate) fn default_hook() -> TerminationHook {
    Arc::new(interrupt_process)
}
