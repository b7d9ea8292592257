//! The graphics capability set consumed by a layout pass.
//!
//! The pass orchestrator never talks to a display directly. It goes through
//! the [`Surface`] trait, injected per pass, which keeps the layout engine
//! testable against a recording fake and portable across display drivers.
//!
//! [`DisplaySurface`] is the production implementation, wrapping any
//! embedded-graphics draw target.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::ui::colors::BLACK;

// =============================================================================
// Capability Trait
// =============================================================================

/// Host graphics capabilities a layout pass consumes.
///
/// Per pass the orchestrator queries the dimensions once, calls [`reset`]
/// once after placement, then issues at most four [`clear_rect`] calls.
///
/// [`reset`]: Surface::reset
/// [`clear_rect`]: Surface::clear_rect
pub trait Surface {
    /// Screen width in pixels.
    fn width(&self) -> u32;

    /// Screen height in pixels.
    fn height(&self) -> u32;

    /// Clear the axis-aligned rectangle with inclusive corners
    /// `(x0, y0)` and `(x1, y1)` back to the background.
    fn clear_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Restore default drawing attributes.
    fn reset(&mut self);
}

// =============================================================================
// embedded-graphics Adapter
// =============================================================================

/// [`Surface`] backed by an embedded-graphics draw target.
///
/// Holds the current clear color as its only drawing attribute; widgets that
/// want a tinted band background can change it for the duration of a pass,
/// [`reset`](Surface::reset) puts it back to black.
pub struct DisplaySurface<D> {
    target: D,
    clear_color: Rgb565,
}

impl<D> DisplaySurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    /// Wrap a draw target with the default (black) background.
    pub fn new(target: D) -> Self {
        Self { target, clear_color: BLACK }
    }

    /// Background color used by [`Surface::clear_rect`].
    pub fn set_clear_color(&mut self, color: Rgb565) {
        self.clear_color = color;
    }

    /// The wrapped draw target, for widget rendering.
    pub fn target(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unwrap the draw target.
    pub fn into_target(self) -> D {
        self.target
    }
}

impl<D> Surface for DisplaySurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn width(&self) -> u32 {
        self.target.size().width
    }

    fn height(&self) -> u32 {
        self.target.size().height
    }

    fn clear_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        Rectangle::with_corners(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_fill(self.clear_color))
            .draw(&mut self.target)
            .ok();
    }

    fn reset(&mut self) {
        self.clear_color = BLACK;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
