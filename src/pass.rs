//! The layout pass: placement, band reclamation, redraw.
//!
//! One call to [`run_layout_pass`] runs the full cycle over the current
//! registry:
//!
//! 1. **Placement** - pack every widget into its corner slot in registry
//!    order and write the resulting positions.
//! 2. **Reclaim** - reset the drawing state, then clear the background band
//!    of every corner that received at least one widget, out to the final
//!    packed offset. Empty corners are left untouched.
//! 3. **Redraw** - invoke every widget's draw capability, again in registry
//!    order.
//!
//! The ordering is strict: no clear happens before all placements are known,
//! and no widget draws before every stale band has been cleared. A pass
//! either fully completes or leaves the screen exactly as it was.
//!
//! # Concurrency
//!
//! Single-threaded, run-to-completion. Slot state is local to one call;
//! nothing persists between passes, so an unchanged registry lays out
//! identically every time.

use crate::anchor::{Anchor, AnchorSet};
use crate::config::{BOTTOM_BAND_HEIGHT, TOP_BAND_HEIGHT};
use crate::surface::Surface;
use crate::widget::Widget;

// =============================================================================
// Errors
// =============================================================================

/// Why a layout pass aborted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutError {
    /// A widget declared an area key outside {`tl`, `tr`, `bl`, `br`}.
    ///
    /// Fatal to the current pass only: nothing was cleared or drawn, and the
    /// next pass is unaffected. Deliberately a total abort rather than a
    /// per-widget skip, so a bad registry leaves the screen untouched instead
    /// of partially redrawn.
    UnknownAnchor,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownAnchor => write!(f, "widget declared an unknown anchor area key"),
        }
    }
}

// =============================================================================
// Pass Orchestrator
// =============================================================================

/// Run one full layout pass over the registry.
///
/// `registry` is `None` when no registry is installed at all; that is a
/// valid silent no-op, not an error. An empty registry likewise performs no
/// clears and no draws.
///
/// # Errors
///
/// [`LayoutError::UnknownAnchor`] if any widget's area key fails to parse.
/// Positions packed before the offending widget have already been written,
/// but no clear or draw side effect has happened.
pub fn run_layout_pass<S: Surface>(
    surface: &mut S,
    registry: Option<&mut [&mut dyn Widget<S>]>,
) -> Result<(), LayoutError> {
    let Some(widgets) = registry else {
        return Ok(());
    };

    let width = surface.width();
    let height = surface.height();
    let mut slots = AnchorSet::new(width, height);

    // Phase 1: placement. Purely computational; aborting here leaves the
    // screen exactly as it was.
    for wd in widgets.iter_mut() {
        let anchor = Anchor::from_key(wd.area()).ok_or(LayoutError::UnknownAnchor)?;
        let position = slots.pack(anchor, wd.width());
        wd.set_position(position);
    }

    // Phase 2: reclaim stale background under the occupied bands.
    surface.reset();
    reclaim_bands(surface, &slots, width, height);

    // Phase 3: redraw on the clean background, in registry order.
    for wd in widgets.iter() {
        wd.draw(surface);
    }

    Ok(())
}

// =============================================================================
// Region Reclaimer
// =============================================================================

/// Clear each occupied corner's band from the screen edge out to the final
/// packed offset. At most four clears per pass; empty corners are skipped so
/// an all-empty registry issues none.
fn reclaim_bands<S: Surface>(surface: &mut S, slots: &AnchorSet, width: u32, height: u32) {
    let w = width as i32;
    let h = height as i32;
    let top = TOP_BAND_HEIGHT as i32;
    let bottom_y = h - BOTTOM_BAND_HEIGHT as i32;

    if slots.occupancy(Anchor::TopLeft) > 0 {
        surface.clear_rect(0, 0, slots.offset(Anchor::TopLeft), top);
    }
    if slots.occupancy(Anchor::BottomLeft) > 0 {
        surface.clear_rect(0, bottom_y, slots.offset(Anchor::BottomLeft), h - 1);
    }
    if slots.occupancy(Anchor::TopRight) > 0 {
        surface.clear_rect(slots.offset(Anchor::TopRight), 0, w - 1, top);
    }
    if slots.occupancy(Anchor::BottomRight) > 0 {
        surface.clear_rect(slots.offset(Anchor::BottomRight), bottom_y, w - 1, h - 1);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embedded_graphics::prelude::*;

    use super::*;

    /// One observable side effect on the fake surface.
    #[derive(Clone, PartialEq, Eq, Debug)]
    enum Call {
        Reset,
        ClearRect(i32, i32, i32, i32),
        Draw(&'static str),
    }

    /// Recording fake standing in for the display back-end.
    struct RecordingSurface {
        width: u32,
        height: u32,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self { width, height, calls: Rc::new(RefCell::new(Vec::new())) }
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn clear_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
            self.calls.borrow_mut().push(Call::ClearRect(x0, y0, x1, y1));
        }

        fn reset(&mut self) {
            self.calls.borrow_mut().push(Call::Reset);
        }
    }

    /// Minimal widget that records its own draw invocations.
    struct FakeWidget {
        name: &'static str,
        width: u32,
        height: u32,
        area: &'static str,
        position: Point,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl FakeWidget {
        fn new(name: &'static str, area: &'static str, width: u32, height: u32, surface: &RecordingSurface) -> Self {
            Self {
                name,
                width,
                height,
                area,
                position: Point::zero(),
                calls: Rc::clone(&surface.calls),
            }
        }
    }

    impl Widget<RecordingSurface> for FakeWidget {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn area(&self) -> &str {
            self.area
        }

        fn position(&self) -> Point {
            self.position
        }

        fn set_position(&mut self, position: Point) {
            self.position = position;
        }

        fn draw(&self, _surface: &mut RecordingSurface) {
            self.calls.borrow_mut().push(Call::Draw(self.name));
        }
    }

    #[test]
    fn test_missing_registry_is_silent_noop() {
        let mut surface = RecordingSurface::new(240, 240);
        assert_eq!(run_layout_pass(&mut surface, None), Ok(()));
        assert!(surface.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_registry_issues_no_clears_or_draws() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut registry: [&mut dyn Widget<RecordingSurface>; 0] = [];
        assert_eq!(run_layout_pass(&mut surface, Some(&mut registry)), Ok(()));
        // The drawing state reset still runs; it is neither a clear nor a draw.
        assert_eq!(*surface.calls.borrow(), vec![Call::Reset]);
    }

    #[test]
    fn test_two_top_left_widgets_reference_scenario() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut w1 = FakeWidget::new("w1", "tl", 20, 20, &surface);
        let mut w2 = FakeWidget::new("w2", "tl", 15, 15, &surface);
        let mut registry: [&mut dyn Widget<RecordingSurface>; 2] = [&mut w1, &mut w2];

        assert_eq!(run_layout_pass(&mut surface, Some(&mut registry)), Ok(()));

        assert_eq!(w1.position, Point::new(28, 0));
        assert_eq!(w2.position, Point::new(48, 0));
        assert_eq!(
            *surface.calls.borrow(),
            vec![
                Call::Reset,
                Call::ClearRect(0, 0, 63, 23),
                Call::Draw("w1"),
                Call::Draw("w2"),
            ]
        );
    }

    #[test]
    fn test_right_to_left_band_clears_to_screen_edge() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut wd = FakeWidget::new("bt", "tr", 15, 15, &surface);
        let mut registry: [&mut dyn Widget<RecordingSurface>; 1] = [&mut wd];

        run_layout_pass(&mut surface, Some(&mut registry)).unwrap();

        // Placed at 212 - 15 = 197; band cleared from the final offset to w-1.
        assert_eq!(wd.position, Point::new(197, 0));
        assert_eq!(
            *surface.calls.borrow(),
            vec![Call::Reset, Call::ClearRect(197, 0, 239, 23), Call::Draw("bt")]
        );
    }

    #[test]
    fn test_bottom_bands_use_bottom_geometry() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut left = FakeWidget::new("bl", "bl", 10, 20, &surface);
        let mut right = FakeWidget::new("br", "br", 10, 20, &surface);
        let mut registry: [&mut dyn Widget<RecordingSurface>; 2] = [&mut left, &mut right];

        run_layout_pass(&mut surface, Some(&mut registry)).unwrap();

        assert_eq!(left.position, Point::new(24, 216));
        assert_eq!(right.position, Point::new(206, 216));
        assert_eq!(
            *surface.calls.borrow(),
            vec![
                Call::Reset,
                Call::ClearRect(0, 216, 34, 239),
                Call::ClearRect(206, 216, 239, 239),
                Call::Draw("bl"),
                Call::Draw("br"),
            ]
        );
    }

    #[test]
    fn test_unknown_anchor_aborts_whole_pass() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut w1 = FakeWidget::new("w1", "tl", 20, 20, &surface);
        let mut w2 = FakeWidget::new("w2", "middle", 20, 20, &surface);
        let mut w3 = FakeWidget::new("w3", "tr", 20, 20, &surface);
        let mut registry: [&mut dyn Widget<RecordingSurface>; 3] = [&mut w1, &mut w2, &mut w3];

        let result = run_layout_pass(&mut surface, Some(&mut registry));

        assert_eq!(result, Err(LayoutError::UnknownAnchor));
        // Total abort: zero resets, clears, and draws. Widgets placed before
        // the bad one keep their (invisible) positions, matching the
        // source behavior of bailing mid-placement.
        assert!(surface.calls.borrow().is_empty());
        assert_eq!(w1.position, Point::new(28, 0));
    }

    #[test]
    fn test_pass_is_idempotent_for_unchanged_registry() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut w1 = FakeWidget::new("w1", "tl", 20, 20, &surface);
        let mut w2 = FakeWidget::new("w2", "br", 30, 20, &surface);

        let mut first = (Point::zero(), Point::zero());
        for round in 0..2 {
            let mut registry: [&mut dyn Widget<RecordingSurface>; 2] = [&mut w1, &mut w2];
            run_layout_pass(&mut surface, Some(&mut registry)).unwrap();
            if round == 0 {
                first = (w1.position, w2.position);
            }
        }
        // No accumulation across passes: slots restart at their origins.
        assert_eq!(first, (w1.position, w2.position));
    }

    #[test]
    fn test_order_preserved_within_anchor() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut w1 = FakeWidget::new("w1", "tl", 18, 20, &surface);
        let mut w2 = FakeWidget::new("w2", "tl", 18, 20, &surface);
        let mut w3 = FakeWidget::new("w3", "tl", 9, 20, &surface);
        let mut registry: [&mut dyn Widget<RecordingSurface>; 3] = [&mut w1, &mut w2, &mut w3];

        run_layout_pass(&mut surface, Some(&mut registry)).unwrap();

        assert!(w1.position.x <= w2.position.x);
        assert!(w2.position.x <= w3.position.x);
        let draws: Vec<_> = surface
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Draw(_)))
            .cloned()
            .collect();
        assert_eq!(draws, vec![Call::Draw("w1"), Call::Draw("w2"), Call::Draw("w3")]);
    }

    #[test]
    fn test_all_clears_precede_all_draws() {
        let mut surface = RecordingSurface::new(240, 240);
        let mut w1 = FakeWidget::new("w1", "tr", 12, 20, &surface);
        let mut w2 = FakeWidget::new("w2", "bl", 12, 20, &surface);
        let mut registry: [&mut dyn Widget<RecordingSurface>; 2] = [&mut w1, &mut w2];

        run_layout_pass(&mut surface, Some(&mut registry)).unwrap();

        let calls = surface.calls.borrow();
        let last_clear = calls
            .iter()
            .rposition(|c| matches!(c, Call::ClearRect(..) | Call::Reset))
            .unwrap();
        let first_draw = calls.iter().position(|c| matches!(c, Call::Draw(_))).unwrap();
        assert!(last_clear < first_draw);
    }
}
