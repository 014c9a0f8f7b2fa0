// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.
//!
//! Single source of truth for settings defaults and the main window
//! geometry.

/// Toast notifications are on until the user opts out.
pub const DEFAULT_NOTIFICATIONS_ENABLED: bool = true;

/// Location access is off until the user opts in.
pub const DEFAULT_LOCATION_ACCESS: bool = false;

/// Door locks engage automatically at night by default.
pub const DEFAULT_AUTO_LOCK: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial main window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Initial main window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Smallest window that still fits the dashboard grid.
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

/// Smallest window that still fits the navbar plus one card row.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
