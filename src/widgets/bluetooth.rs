//! Bluetooth connection indicator widget.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::anchor::Anchor;
use crate::surface::DisplaySurface;
use crate::ui::colors::{BLUE, GRAY};
use crate::widget::Widget;

/// Glyph band width.
const WIDTH: u32 = 15;

/// Glyph band height.
const HEIGHT: u32 = 22;

/// Bluetooth rune, blue when connected and gray when not.
pub struct BluetoothWidget {
    connected: bool,
    anchor: Anchor,
    position: Point,
}

impl BluetoothWidget {
    /// New indicator, initially disconnected.
    pub fn new(anchor: Anchor) -> Self {
        Self { connected: false, anchor, position: Point::zero() }
    }

    /// Update the connection state.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Current connection state.
    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Position assigned by the last layout pass.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Place the widget directly, bypassing layout.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl<D> Widget<DisplaySurface<D>> for BluetoothWidget
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn width(&self) -> u32 {
        WIDTH
    }

    fn height(&self) -> u32 {
        HEIGHT
    }

    fn area(&self) -> &str {
        self.anchor.key()
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn draw(&self, surface: &mut DisplaySurface<D>) {
        let color = if self.connected { BLUE } else { GRAY };
        let style = PrimitiveStyle::with_stroke(color, 1);
        let cx = self.position.x + WIDTH as i32 / 2;
        let y = self.position.y;
        let display = surface.target();

        // Spine, then the two folded strokes of the rune.
        Line::new(Point::new(cx, y + 3), Point::new(cx, y + 19))
            .into_styled(style)
            .draw(display)
            .ok();
        Line::new(Point::new(cx, y + 3), Point::new(cx + 4, y + 7))
            .into_styled(style)
            .draw(display)
            .ok();
        Line::new(Point::new(cx + 4, y + 7), Point::new(cx - 4, y + 15))
            .into_styled(style)
            .draw(display)
            .ok();
        Line::new(Point::new(cx, y + 19), Point::new(cx + 4, y + 15))
            .into_styled(style)
            .draw(display)
            .ok();
        Line::new(Point::new(cx + 4, y + 15), Point::new(cx - 4, y + 7))
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
