/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("fs", "Scanning {}", root.display());
/// log_status!("manifest", "Wrote {} projects", count);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

/// Macro for prefixed error logging to stderr.
///
/// Unlike `log_status!`, this always prints: build logs captured by CI
/// must still show which project was skipped and why.
#[macro_export]
macro_rules! log_error {
    ($prefix:expr, $($arg:tt)*) => {
        eprintln!(concat!("[", $prefix, "] error: {}"), format_args!($($arg)*));
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `folio::manifest` instead of `folio::core::manifest`
pub use core::*;
pub use utils::*;
