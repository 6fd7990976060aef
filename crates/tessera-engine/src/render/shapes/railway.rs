use crate::paint::{palette, Stroke};
use crate::render::DrawTarget;
use crate::scene::shapes::RailwayShape;

const BED: Stroke = Stroke::new(2.0, palette::YELLOW);
const TIES: Stroke = Stroke::new(1.2, palette::BLACK).dashed(4.0, 4.0);

pub(super) fn draw<T: DrawTarget + ?Sized>(shape: &RailwayShape, target: &mut T) {
    target.stroke_polyline(&shape.points, BED);
    target.stroke_polyline(&shape.points, TIES);
}
