//! Debug logging for the reporter.
//!
//! Verbose tracing of collection and the render pass, enabled via
//! `PRINT_ROUTES_DEBUG=1` (or `true`) or programmatically with
//! [`enable_debug`]. Output goes to stderr so it never mixes with the
//! route table on stdout.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for debug logging.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Global flag to track if init() has been called.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize debug logging from the environment.
///
/// Called automatically on first use of [`is_debug_enabled`]; explicit
/// calls are harmless.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let enabled = env::var("PRINT_ROUTES_DEBUG")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
}

/// Check if debug logging is enabled.
#[must_use]
pub fn is_debug_enabled() -> bool {
    if !INITIALIZED.load(Ordering::SeqCst) {
        init();
    }
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Enable debug logging programmatically.
pub fn enable_debug() {
    INITIALIZED.store(true, Ordering::SeqCst);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging programmatically.
pub fn disable_debug() {
    INITIALIZED.store(true, Ordering::SeqCst);
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Reset the debug state so `init()` re-reads the environment.
#[doc(hidden)]
pub fn reset_for_test() {
    INITIALIZED.store(false, Ordering::SeqCst);
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Log a debug message to stderr if debug logging is enabled.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[PRINT_ROUTES] {}", format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_enable_disable() {
        enable_debug();
        assert!(is_debug_enabled());
        disable_debug();
        assert!(!is_debug_enabled());
        reset_for_test();
    }

    #[test]
    #[serial]
    #[allow(unsafe_code)] // std::env::set_var is unsafe in edition 2024
    fn test_init_reads_env() {
        reset_for_test();
        unsafe {
            env::set_var("PRINT_ROUTES_DEBUG", "1");
        }
        assert!(is_debug_enabled());

        reset_for_test();
        unsafe {
            env::set_var("PRINT_ROUTES_DEBUG", "0");
        }
        assert!(!is_debug_enabled());

        unsafe {
            env::remove_var("PRINT_ROUTES_DEBUG");
        }
        reset_for_test();
    }
}
