//! RGB565 color constants for the status bands.
//!
//! Rgb565 is native to the ST7789-class panels these widgets target, so no
//! conversion happens when styles reach the display buffer. Standard colors
//! come from the `RgbColor` trait constants; custom shades are constructed
//! directly.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Default band background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Icon outlines and clock text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Critical battery fill.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Charging battery fill.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Connected bluetooth glyph.
pub const BLUE: Rgb565 = Rgb565::BLUE;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Dark gray for disconnected or inactive glyphs.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
