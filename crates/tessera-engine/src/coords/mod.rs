//! Coordinate types shared by the classifier and the compositor.
//!
//! Two spaces are in play:
//! - projected space: Mercator meters, origin at (0°, 0°), +Y north
//! - pixel space: canvas pixels, origin top-left, +Y down
//!
//! Both use [`Vec2`]. The compositor maps one onto the other with a single
//! uniform scale and a vertical flip.

mod extent;
pub mod mercator;
mod vec2;

pub use extent::Extent;
pub use vec2::Vec2;
