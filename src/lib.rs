//! Corner-docked status widget layout for small fixed-size displays.
//!
//! Status widgets (battery, bluetooth, clock, ...) are packed into the four
//! corners of the screen without overlap. One call to
//! [`run_layout_pass`](pass::run_layout_pass) runs a full cycle: place every
//! registered widget, clear the stale background under the occupied corner
//! bands, then let each widget redraw itself at its assigned position.
//!
//! - [`anchor`]: The four corner docking slots and the packing engine
//! - [`surface`]: Injected graphics capability set (dimensions, clear, reset)
//! - [`widget`]: The widget contract and the registry handle
//! - [`pass`]: The pass orchestrator and its error type
//! - [`widgets`]: Bundled status widgets
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` compatible and runs unchanged on embedded targets.
//! Tests build with `std` enabled (via `cfg_attr`) so the standard test
//! harness works on the host.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod anchor;
pub mod config;
pub mod pass;
pub mod surface;
pub mod widget;
pub mod widgets;

mod ui {
    pub mod colors;
    pub mod styles;
}

// Re-export at top level for existing imports
pub use anchor::Anchor;
pub use pass::{LayoutError, run_layout_pass};
pub use surface::{DisplaySurface, Surface};
pub use ui::{colors, styles};
pub use widget::{Registry, Widget};
