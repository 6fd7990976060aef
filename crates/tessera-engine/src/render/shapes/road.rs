use crate::paint::{palette, Stroke};
use crate::render::DrawTarget;
use crate::scene::shapes::RoadShape;

// Brown casing first, yellow fill on top.
const CASING: Stroke = Stroke::new(2.0, palette::BROWN);
const FILL: Stroke = Stroke::new(1.2, palette::YELLOW);

pub(super) fn draw<T: DrawTarget + ?Sized>(shape: &RoadShape, target: &mut T) {
    target.stroke_polyline(&shape.points, CASING);
    target.stroke_polyline(&shape.points, FILL);
}
