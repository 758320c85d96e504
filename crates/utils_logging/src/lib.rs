#![deny(missing_docs)]
//! Shared logging utilities for the presentation utils workspace.
//!
//! This crate provides the `utils_*` logging macros used by the other crates,
//! global logger initialization for binaries, and a minimal test initializer.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Default log file, relative to the current working directory.
pub const LOG_FILE: &str = "./utils.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! utils_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! utils_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! utils_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! utils_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! utils_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to [`LOG_FILE`].
    File,
    /// Write to the terminal. Every level goes to stderr so stdout stays free
    /// for program output.
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    fn writes_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }

    fn writes_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }
}

/// Initialize the global logger with the specified destination.
///
/// Returns `true` when a logger was installed. A second call, or a file-only
/// destination whose file cannot be created, leaves the facade untouched.
pub fn initialize(destination: LogDestination) -> bool {
    initialize_with_file(destination, Path::new(LOG_FILE))
}

/// Like [`initialize`], but writes file output to `log_path`.
pub fn initialize_with_file(destination: LogDestination, log_path: &Path) -> bool {
    let loggers = build_loggers(destination, LevelFilter::Info, log_path);
    !loggers.is_empty() && CombinedLogger::init(loggers).is_ok()
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    log_path: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.writes_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.writes_file() {
        match File::create(log_path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: skipping log file {}: {err}", log_path.display()),
        }
    }
    loggers
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_destination_with_bad_path_builds_no_loggers() {
        let bad = Path::new("/nonexistent-dir-for-utils-logging/utils.log");
        let loggers = build_loggers(LogDestination::File, LevelFilter::Info, bad);
        assert!(loggers.is_empty());
    }

    #[test]
    fn both_destination_keeps_terminal_when_file_fails() {
        let bad = Path::new("/nonexistent-dir-for-utils-logging/utils.log");
        let loggers = build_loggers(LogDestination::Both, LevelFilter::Info, bad);
        assert_eq!(loggers.len(), 1);
    }

    #[test]
    fn terminal_destination_builds_one_logger() {
        let loggers = build_loggers(LogDestination::Terminal, LevelFilter::Info, Path::new(LOG_FILE));
        assert_eq!(loggers.len(), 1);
    }

    #[test]
    fn destinations_select_terminal_and_file() {
        assert!(LogDestination::Terminal.writes_terminal());
        assert!(!LogDestination::Terminal.writes_file());
        assert!(!LogDestination::File.writes_terminal());
        assert!(LogDestination::Both.writes_terminal() && LogDestination::Both.writes_file());
    }
}
