//! Logging utilities with separate engine and client targets
//!
//! The engine writes through the [`ENGINE_TARGET`] target and applications
//! through [`APP_TARGET`], so both can be filtered independently with
//! `RUST_LOG` (for example `RUST_LOG=ENGINE=warn,APP=trace`).

pub use log::{debug, error, info, trace, warn};

use std::io::Write;

/// Log target used by the engine itself
pub const ENGINE_TARGET: &str = "ENGINE";

/// Log target used by client applications
pub const APP_TARGET: &str = "APP";

/// Initialize the logging system
///
/// `default_level` applies when `RUST_LOG` is not set. Calling this more than
/// once returns an error from the `log` facade, which callers may ignore.
pub fn init(default_level: &str) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {}: {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

/// Trace-level message on the engine target
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)+) => { $crate::foundation::logging::trace!(target: $crate::foundation::logging::ENGINE_TARGET, $($arg)+) };
}

/// Debug-level message on the engine target
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)+) => { $crate::foundation::logging::debug!(target: $crate::foundation::logging::ENGINE_TARGET, $($arg)+) };
}

/// Info-level message on the engine target
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)+) => { $crate::foundation::logging::info!(target: $crate::foundation::logging::ENGINE_TARGET, $($arg)+) };
}

/// Warn-level message on the engine target
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)+) => { $crate::foundation::logging::warn!(target: $crate::foundation::logging::ENGINE_TARGET, $($arg)+) };
}

/// Error-level message on the engine target
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)+) => { $crate::foundation::logging::error!(target: $crate::foundation::logging::ENGINE_TARGET, $($arg)+) };
}

/// Trace-level message on the client target
#[macro_export]
macro_rules! app_trace {
    ($($arg:tt)+) => { $crate::foundation::logging::trace!(target: $crate::foundation::logging::APP_TARGET, $($arg)+) };
}

/// Debug-level message on the client target
#[macro_export]
macro_rules! app_debug {
    ($($arg:tt)+) => { $crate::foundation::logging::debug!(target: $crate::foundation::logging::APP_TARGET, $($arg)+) };
}

/// Info-level message on the client target
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)+) => { $crate::foundation::logging::info!(target: $crate::foundation::logging::APP_TARGET, $($arg)+) };
}

/// Warn-level message on the client target
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)+) => { $crate::foundation::logging::warn!(target: $crate::foundation::logging::APP_TARGET, $($arg)+) };
}

/// Error-level message on the client target
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)+) => { $crate::foundation::logging::error!(target: $crate::foundation::logging::APP_TARGET, $($arg)+) };
}
