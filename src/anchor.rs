//! Corner anchors and the dock packing engine.
//!
//! Each of the four screen corners is a docking slot. Widgets assigned to a
//! slot are packed shoulder to shoulder along the top or bottom band, growing
//! inward from the corner: left-side anchors grow rightward, right-side
//! anchors grow leftward. Packing is strictly first-come-first-placed, so the
//! registry order alone decides who sits closest to the corner.
//!
//! An [`AnchorSet`] lives for exactly one layout pass. It is rebuilt from the
//! screen dimensions at the start of every pass, which is what makes repeated
//! passes idempotent: offsets never accumulate across frames.

use embedded_graphics::prelude::*;

use crate::config::{BOTTOM_BAND_HEIGHT, BOTTOM_INSET, TOP_INSET};

// =============================================================================
// Anchor Keys
// =============================================================================

/// One of the four corner docking slots.
///
/// Widgets declare their slot with the short area keys `"tl"`, `"tr"`,
/// `"bl"`, `"br"`; [`Anchor::from_key`] maps a key back to its slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Anchor {
    /// Top-left corner, packing left to right.
    TopLeft,
    /// Top-right corner, packing right to left.
    TopRight,
    /// Bottom-left corner, packing left to right.
    BottomLeft,
    /// Bottom-right corner, packing right to left.
    BottomRight,
}

impl Anchor {
    /// Parse an area key. Returns `None` for anything outside
    /// {`"tl"`, `"tr"`, `"bl"`, `"br"`}.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tl" => Some(Self::TopLeft),
            "tr" => Some(Self::TopRight),
            "bl" => Some(Self::BottomLeft),
            "br" => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// The area key for this slot.
    pub const fn key(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
        }
    }

    /// Whether this slot packs right to left (right-side corners).
    pub const fn right_to_left(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Slot index into an [`AnchorSet`].
    const fn idx(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }
}

// =============================================================================
// Pass-local Packing State
// =============================================================================

/// Packing state for a single anchor during one pass.
#[derive(Clone, Copy, Debug)]
struct Slot {
    /// Running offset along the band. Starts at the corner origin and moves
    /// inward as widgets are packed.
    x: i32,
    /// Fixed band y for this corner.
    y: i32,
    /// Growth direction. Right-to-left slots advance x negatively.
    rtl: bool,
    /// Widgets packed into this slot so far this pass.
    count: usize,
}

/// The four corner slots for one layout pass.
///
/// Built fresh from the screen dimensions at pass start; never reused.
#[derive(Debug)]
pub struct AnchorSet {
    slots: [Slot; 4],
}

impl AnchorSet {
    /// Initialize all four slots at their corner origins with zero occupancy.
    pub fn new(width: u32, height: u32) -> Self {
        let w = width as i32;
        let h = height as i32;
        let bottom_y = h - BOTTOM_BAND_HEIGHT as i32;
        Self {
            slots: [
                Slot { x: TOP_INSET as i32, y: 0, rtl: false, count: 0 },
                Slot { x: w - TOP_INSET as i32, y: 0, rtl: true, count: 0 },
                Slot { x: BOTTOM_INSET as i32, y: bottom_y, rtl: false, count: 0 },
                Slot { x: w - BOTTOM_INSET as i32, y: bottom_y, rtl: true, count: 0 },
            ],
        }
    }

    /// Pack one widget of the given width into a slot and return its
    /// placement position.
    ///
    /// The placement x comes from the pre-advance offset (right-to-left slots
    /// subtract the width first), then the offset advances outward by the
    /// full width. Consecutive calls for the same slot therefore yield
    /// adjacent, disjoint intervals.
    pub fn pack(&mut self, anchor: Anchor, width: u32) -> Point {
        let slot = &mut self.slots[anchor.idx()];
        let w = width as i32;
        let x = if slot.rtl { slot.x - w } else { slot.x };
        slot.x += if slot.rtl { -w } else { w };
        slot.count += 1;
        Point::new(x, slot.y)
    }

    /// Final band offset for a slot (the inward edge of its packed span).
    pub fn offset(&self, anchor: Anchor) -> i32 {
        self.slots[anchor.idx()].x
    }

    /// Number of widgets packed into a slot this pass.
    pub fn occupancy(&self, anchor: Anchor) -> usize {
        self.slots[anchor.idx()].count
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
