//! Digital clock widget (`HH:MM`).

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::anchor::Anchor;
use crate::surface::DisplaySurface;
use crate::ui::styles::{CLOCK_FONT, CLOCK_STYLE_WHITE, TOP_LEFT_TEXT};
use crate::widget::Widget;

/// Characters in the `HH:MM` readout.
const DIGITS: u32 = 5;

/// 24-hour clock readout. Content is pushed in from outside; the widget
/// never reads a time source itself.
pub struct ClockWidget {
    hours: u8,
    minutes: u8,
    anchor: Anchor,
    position: Point,
}

impl ClockWidget {
    /// New clock showing 00:00.
    pub fn new(anchor: Anchor) -> Self {
        Self { hours: 0, minutes: 0, anchor, position: Point::zero() }
    }

    /// Update the displayed time (wrapped into 24h/60min range).
    pub fn set_time(&mut self, hours: u8, minutes: u8) {
        self.hours = hours % 24;
        self.minutes = minutes % 60;
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

impl<D> Widget<DisplaySurface<D>> for ClockWidget
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn width(&self) -> u32 {
        CLOCK_FONT.character_size.width * DIGITS + CLOCK_FONT.character_spacing * (DIGITS - 1)
    }

    fn height(&self) -> u32 {
        CLOCK_FONT.character_size.height
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
        let mut readout: String<8> = String::new();
        let _ = write!(readout, "{:02}:{:02}", self.hours, self.minutes);
        Text::with_text_style(&readout, self.position, CLOCK_STYLE_WHITE, TOP_LEFT_TEXT)
            .draw(surface.target())
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::ui::colors::WHITE;

    type SimSurface = DisplaySurface<SimulatorDisplay<Rgb565>>;

    #[test]
    fn test_time_wraps_into_range() {
        let mut clock = ClockWidget::new(Anchor::TopLeft);
        clock.set_time(25, 61);
        assert_eq!((clock.hours, clock.minutes), (1, 1));
    }

    #[test]
    fn test_draw_renders_text_within_declared_bounds() {
        let mut clock = ClockWidget::new(Anchor::TopLeft);
        clock.set_time(12, 34);
        clock.set_position(Point::new(28, 0));

        let display = SimulatorDisplay::<Rgb565>::new(Size::new(240, 240));
        let mut surface = DisplaySurface::new(display);
        Widget::<SimSurface>::draw(&clock, &mut surface);
        let display = surface.into_target();

        let w = Widget::<SimSurface>::width(&clock) as i32;
        let h = Widget::<SimSurface>::height(&clock) as i32;
        let mut lit_inside = false;
        for y in 0..240 {
            for x in 0..240 {
                if display.get_pixel(Point::new(x, y)) == WHITE {
                    let inside = (28..28 + w).contains(&x) && (0..h).contains(&y);
                    assert!(inside, "pixel ({x},{y}) outside declared bounds");
                    lit_inside = true;
                }
            }
        }
        assert!(lit_inside, "clock text drew nothing");
    }
}
