#![deny(missing_docs)]
//! Shared logging utilities for the feed filter workspace.
//!
//! This crate provides the `scan_*` logging macros used across the codebase,
//! the logger initialisation used by the binary, and a minimal test
//! initializer for the global logger.

use std::cell::Cell;
use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

thread_local! {
    /// Thread-local storage for the number of the scan pass in progress.
    static SCAN_PASS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the scan pass number for the current thread.
/// The scanner calls this once at the start of every pass.
pub fn set_scan_pass(pass: u64) {
    SCAN_PASS.with(|v| v.set(pass));
}

/// Retrieves the scan pass number for the current thread.
/// Returns 0 if no pass has started yet.
pub fn scan_pass() -> u64 {
    SCAN_PASS.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current scan pass.
#[macro_export]
macro_rules! scan_trace {
    ($($arg:tt)*) => {{
        log::trace!("[pass {}] {}", $crate::scan_pass(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current scan pass.
#[macro_export]
macro_rules! scan_info {
    ($($arg:tt)*) => {{
        log::info!("[pass {}] {}", $crate::scan_pass(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current scan pass.
#[macro_export]
macro_rules! scan_debug {
    ($($arg:tt)*) => {{
        log::debug!("[pass {}] {}", $crate::scan_pass(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current scan pass.
#[macro_export]
macro_rules! scan_warn {
    ($($arg:tt)*) => {{
        log::warn!("[pass {}] {}", $crate::scan_pass(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current scan pass.
#[macro_export]
macro_rules! scan_error {
    ($($arg:tt)*) => {{
        log::error!("[pass {}] {}", $crate::scan_pass(), format_args!($($arg)*));
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to ./feed_filter.log in the current directory.
    File,
    /// Write to the terminal (stderr for warnings, stdout otherwise).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the global logger with the specified destination and level.
///
/// For `LogDestination::File` or `Both`, creates `./feed_filter.log` in the
/// current working directory. Initialisation errors are ignored so a second
/// call is harmless.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from("./feed_filter.log");
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

/// Initializes a simple terminal logger for use in unit tests.
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
    use super::{scan_pass, set_scan_pass};

    #[test]
    fn scan_pass_is_thread_local() {
        set_scan_pass(7);
        assert_eq!(scan_pass(), 7);
        let other = std::thread::spawn(scan_pass).join().unwrap_or(u64::MAX);
        assert_eq!(other, 0);
    }
}
