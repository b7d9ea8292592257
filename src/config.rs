//! Fixed anchor geometry constants.
//!
//! The corner insets and band heights are fixed properties of the dock
//! layout, not of any particular display. Screen dimensions are the one
//! thing queried at runtime (once per pass, from the [`Surface`]); the
//! 240x240 constants below only back the bundled demo/test display.
//!
//! [`Surface`]: crate::surface::Surface

// =============================================================================
// Corner Insets
// =============================================================================

/// Horizontal inset of the top anchors from the screen edge.
/// Leaves room for the bezel corners on round-rect watch displays.
pub const TOP_INSET: u32 = 28;

/// Horizontal inset of the bottom anchors from the screen edge.
pub const BOTTOM_INSET: u32 = 24;

// =============================================================================
// Band Heights
// =============================================================================

/// Height of the top widget band. Top-anchored widgets must fit within it.
pub const TOP_BAND_HEIGHT: u32 = 23;

/// Height of the bottom widget band. Bottom-anchored widgets must fit within
/// it. Also fixes the bottom anchors' y at `screen height - BOTTOM_BAND_HEIGHT`.
pub const BOTTOM_BAND_HEIGHT: u32 = 24;

// =============================================================================
// Default Display
// =============================================================================

/// Default display width in pixels (240x240 round-rect LCD).
pub const SCREEN_WIDTH: u32 = 240;

/// Default display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;
