#![deny(missing_docs)]
//! Shared logging utilities for the repo radar workspace.
//!
//! This crate provides the `radar_*` logging macros used across the codebase,
//! a per-thread event counter that tags log lines with the store revision,
//! and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current store revision.
    static REVISION: Cell<u64> = const { Cell::new(0) };
}

/// Sets the store revision for the current thread.
/// The store calls this once per dispatched message.
pub fn set_revision(revision: u64) {
    REVISION.with(|v| v.set(revision));
}

/// Retrieves the store revision for the current thread.
/// Returns 0 if no message has been dispatched yet.
pub fn revision() -> u64 {
    REVISION.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! radar_trace {
    ($($arg:tt)*) => {{
        log::trace!("[r{}] {}", $crate::revision(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! radar_info {
    ($($arg:tt)*) => {{
        log::info!("[r{}] {}", $crate::revision(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! radar_debug {
    ($($arg:tt)*) => {{
        log::debug!("[r{}] {}", $crate::revision(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! radar_warn {
    ($($arg:tt)*) => {{
        log::warn!("[r{}] {}", $crate::revision(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! radar_error {
    ($($arg:tt)*) => {{
        log::error!("[r{}] {}", $crate::revision(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
