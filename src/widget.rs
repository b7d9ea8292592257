//! The widget contract and the registry handle.
//!
//! Widgets own their content and rendering; the layout engine only decides
//! where they sit. The contract is deliberately minimal: declared size, an
//! area key naming the corner slot, a position field the engine writes, and
//! a draw capability invoked after the stale background has been reclaimed.

use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::surface::Surface;

/// A corner-docked status widget.
///
/// Generic over the [`Surface`] it draws on so the same widget runs against
/// hardware, the simulator, and test fakes.
pub trait Widget<S: Surface> {
    /// Declared width in pixels. Fixed before layout; the packed span at an
    /// anchor is the sum of these.
    fn width(&self) -> u32;

    /// Declared height in pixels. Must fit the anchor band.
    fn height(&self) -> u32;

    /// Area key naming the corner slot (`"tl"`, `"tr"`, `"bl"`, `"br"`).
    ///
    /// Anything else makes the whole pass abort with
    /// [`LayoutError::UnknownAnchor`](crate::pass::LayoutError::UnknownAnchor).
    fn area(&self) -> &str;

    /// Position assigned by the most recent layout pass.
    fn position(&self) -> Point;

    /// Placement output, written by the layout engine once per pass.
    fn set_position(&mut self, position: Point);

    /// Render at the assigned position. Called after band reclamation, in
    /// registry order.
    fn draw(&self, surface: &mut S);
}

/// Ordered widget registry, owned by the caller.
///
/// Membership is mutated between passes only; during a pass the layout
/// engine reads it once and writes nothing but widget positions.
pub type Registry<'a, S: Surface, const N: usize> = Vec<&'a mut dyn Widget<S>, N>;
