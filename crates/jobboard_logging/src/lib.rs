#![deny(missing_docs)]
//! Logging front end for the job board crates.
//!
//! Every crate logs through the `board_*` macros; the binary decides where the
//! records go. Callers only need this crate, not `log` itself.

use log::LevelFilter;

#[doc(hidden)]
pub use log as __log;

#[doc(hidden)]
#[macro_export]
macro_rules! __board_log {
    ($level:ident, $($arg:tt)*) => {{
        $crate::__log::log!($crate::__log::Level::$level, $($arg)*);
    }};
}

/// Trace-level record.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => { $crate::__board_log!(Trace, $($arg)*) };
}

/// Debug-level record.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => { $crate::__board_log!(Debug, $($arg)*) };
}

/// Info-level record.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => { $crate::__board_log!(Info, $($arg)*) };
}

/// Warn-level record.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => { $crate::__board_log!(Warn, $($arg)*) };
}

/// Error-level record.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => { $crate::__board_log!(Error, $($arg)*) };
}

/// Debug in debug builds, info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Terminal logger for tests. Later calls are no-ops.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
