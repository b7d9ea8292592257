//! Bundled status widgets.
//!
//! All widgets draw through [`DisplaySurface`](crate::surface::DisplaySurface)
//! and are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence. Each owns only its own content and rendering; the corner it
//! docks to is chosen at construction and placement is written by the layout
//! pass.

mod battery;
mod bluetooth;
mod clock;

pub use battery::BatteryWidget;
pub use bluetooth::BluetoothWidget;
pub use clock::ClockWidget;

// =============================================================================
// Integration Tests (full pass over real widgets on the simulator display)
// =============================================================================
