use crate::paint::{palette, Stroke};
use crate::render::DrawTarget;
use crate::scene::shapes::BorderShape;

const STROKE: Stroke = Stroke::new(2.0, palette::GRAY);

pub(super) fn draw<T: DrawTarget + ?Sized>(shape: &BorderShape, target: &mut T) {
    target.stroke_polyline(&shape.points, STROKE);
}
