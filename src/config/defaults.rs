// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Auto-dismiss Defaults
// ==========================================================================

/// Toasts stay until removed externally unless auto-dismiss is enabled.
pub const DEFAULT_AUTO_DISMISS: bool = false;

/// Seconds a success toast stays visible when auto-dismiss is on.
pub const DEFAULT_SUCCESS_SECS: u64 = 3;

/// Seconds an info toast stays visible when auto-dismiss is on.
pub const DEFAULT_INFO_SECS: u64 = 3;

/// Seconds a warning toast stays visible when auto-dismiss is on.
pub const DEFAULT_WARNING_SECS: u64 = 5;

/// Seconds a toast with a custom type stays visible when auto-dismiss is on.
pub const DEFAULT_OTHER_SECS: u64 = 3;

/// Minimum accepted duration; shorter values are clamped.
pub const MIN_DISMISS_SECS: u64 = 1;

/// Maximum accepted duration; longer values are clamped.
pub const MAX_DISMISS_SECS: u64 = 600;

// ==========================================================================
// Sweep Defaults
// ==========================================================================

/// Interval between expiry sweeps in the demo application (milliseconds).
pub const SWEEP_INTERVAL_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISMISS_SECS > 0);
    assert!(MIN_DISMISS_SECS < MAX_DISMISS_SECS);
    assert!(DEFAULT_SUCCESS_SECS >= MIN_DISMISS_SECS && DEFAULT_SUCCESS_SECS <= MAX_DISMISS_SECS);
    assert!(DEFAULT_WARNING_SECS >= DEFAULT_SUCCESS_SECS);
    assert!(SWEEP_INTERVAL_MS > 0);
};
