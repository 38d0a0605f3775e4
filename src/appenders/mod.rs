//! Appender implementations

pub mod console;
pub mod file;

pub use console::{ConsoleAppender, ConsoleCapture, NOT_SAVED_TAG};
pub use file::FileAppender;
