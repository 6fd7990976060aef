use crate::coords::Vec2;
use crate::paint::{Color, Stroke};

/// Surface that shapes paint onto.
///
/// All coordinates are in pixels (top-left origin). Implementations may ignore
/// primitives they cannot draw, e.g. a polyline with fewer than two points.
pub trait DrawTarget {
    /// Pixel size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Replaces every pixel with `color`.
    fn fill(&mut self, color: Color);

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke);

    /// Fills the polygon outlined by `points` (implicitly closed, non-zero rule).
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}
