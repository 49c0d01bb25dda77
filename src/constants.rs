//! Engine-wide constants.
//!
//! Centralizes magic numbers for the selection engine so the defaults used by
//! settings, the auto-scroll driver and the tests stay in one place.

// ============================================================================
// Auto-Scroll
// ============================================================================

/// Height of the band at the top and bottom of the viewport that triggers
/// auto-scroll while dragging, in pixels
pub const SCROLL_EDGE_SIZE: f32 = 50.0;

/// Maximum auto-scroll speed in pixels per frame
pub const MAX_SCROLL_SPEED: f32 = 15.0;

// ============================================================================
// Input
// ============================================================================

/// Pointer button that starts a drag session
pub const PRIMARY_BUTTON: u8 = 0;

/// Key name that clears the selection
pub const ESCAPE_KEY: &str = "Escape";

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the user config dir
pub const SETTINGS_DIR_NAME: &str = "rubberband";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Performance
// ============================================================================

/// Reconciliations slower than this are logged as slow operations (ms)
pub const RECONCILE_WARN_MS: f64 = 4.0;
