//! Battery level widget.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::anchor::Anchor;
use crate::surface::DisplaySurface;
use crate::ui::colors::{GREEN, RED, WHITE};
use crate::ui::styles::{LABEL_FONT, LABEL_STYLE_WHITE, TOP_LEFT_TEXT};
use crate::widget::Widget;

/// Width of the battery icon itself: 22px body + 2px terminal nub + 2px gap.
const ICON_WIDTH: u32 = 26;

/// Icon band height. The icon is drawn vertically centered inside it.
const ICON_HEIGHT: u32 = 22;

/// Interior fill width at 100%.
const FILL_SPAN: u32 = 18;

/// Battery level below which the fill turns red (unless charging).
const LOW_LEVEL: u8 = 15;

/// White outline for the battery body and nub.
const OUTLINE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

/// Battery status icon with an optional percentage label.
pub struct BatteryWidget {
    level: u8,
    charging: bool,
    show_percent: bool,
    anchor: Anchor,
    position: Point,
}

impl BatteryWidget {
    /// New battery widget at full charge, icon only.
    pub fn new(anchor: Anchor) -> Self {
        Self {
            level: 100,
            charging: false,
            show_percent: false,
            anchor,
            position: Point::zero(),
        }
    }

    /// Show a numeric percentage next to the icon. Widens the widget, so the
    /// next layout pass repacks the band.
    pub fn with_percent(mut self) -> Self {
        self.show_percent = true;
        self
    }

    /// Update the charge level (clamped to 0..=100).
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Update the charging flag.
    pub fn set_charging(&mut self, charging: bool) {
        self.charging = charging;
    }

    /// Current charge level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Position assigned by the last layout pass.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Place the widget directly, bypassing layout.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn fill_color(&self) -> Rgb565 {
        if self.charging {
            GREEN
        } else if self.level <= LOW_LEVEL {
            RED
        } else {
            WHITE
        }
    }
}

impl<D> Widget<DisplaySurface<D>> for BatteryWidget
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn width(&self) -> u32 {
        if self.show_percent {
            // Up to four label characters: "100%"
            ICON_WIDTH + (LABEL_FONT.character_size.width + LABEL_FONT.character_spacing) * 4
        } else {
            ICON_WIDTH
        }
    }

    fn height(&self) -> u32 {
        ICON_HEIGHT
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
        let Point { x, y } = self.position;
        let display = surface.target();

        // Body outline with the terminal nub on the right.
        Rectangle::new(Point::new(x, y + 5), Size::new(22, 12))
            .into_styled(OUTLINE_STYLE)
            .draw(display)
            .ok();
        Rectangle::new(Point::new(x + 22, y + 8), Size::new(2, 6))
            .into_styled(PrimitiveStyle::with_fill(WHITE))
            .draw(display)
            .ok();

        // Proportional interior fill.
        let fill = FILL_SPAN * u32::from(self.level) / 100;
        if fill > 0 {
            Rectangle::new(Point::new(x + 2, y + 7), Size::new(fill, 8))
                .into_styled(PrimitiveStyle::with_fill(self.fill_color()))
                .draw(display)
                .ok();
        }

        if self.show_percent {
            let mut label: String<8> = String::new();
            let _ = write!(label, "{}%", self.level);
            Text::with_text_style(
                &label,
                Point::new(x + ICON_WIDTH as i32, y + 5),
                LABEL_STYLE_WHITE,
                TOP_LEFT_TEXT,
            )
            .draw(display)
            .ok();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
