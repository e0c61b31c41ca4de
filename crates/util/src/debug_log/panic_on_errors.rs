//! Whether or not [crate::debug_log_error] should panic.

#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether panicking on errors is enabled or not (see
/// [crate::debug_log_error]).
///
/// [super::enabled] must be true for this to have any effect. This is disabled
/// by default.
pub fn enabled() -> bool {
    #[cfg(debug_assertions)]
    return ENABLED.load(Ordering::Relaxed);

    #[cfg(not(debug_assertions))]
    return false;
}

/// Disable panicking on errors.
pub fn disable() {
    #[cfg(debug_assertions)]
    ENABLED.store(false, Ordering::Relaxed);
}

/// Enable panicking on errors.
///
/// Trying to enable this when `cfg!(debug_assertions)` is false will result in
/// the program panicking.
pub fn enable() {
    #[cfg(not(debug_assertions))]
    panic!("Panicking on errors cannot be enabled because debug logging cannot be enabled.");

    #[cfg(debug_assertions)]
    ENABLED.store(true, Ordering::Relaxed);
}

#[cfg(debug_assertions)]
static ENABLED: AtomicBool = AtomicBool::new(false);
