//! Pre-computed static text styles for the bundled widgets.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so every style here lives in the binary's
//! read-only data section and costs nothing per frame.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_10_POINT, PROFONT_14_POINT};

use super::colors::WHITE;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned, top-baseline text. Widget text is positioned from the
/// widget's own top-left placement corner.
pub const TOP_LEFT_TEXT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Font for the clock digits. 14pt fills most of the 23px top band.
pub const CLOCK_FONT: &MonoFont<'_> = &PROFONT_14_POINT;

/// Font for small widget annotations (battery percentage).
pub const LABEL_FONT: &MonoFont<'_> = &PROFONT_10_POINT;

// =============================================================================
// Static Styles
// =============================================================================

/// White clock digits.
pub const CLOCK_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(CLOCK_FONT, WHITE);

/// White annotation text.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, WHITE);
