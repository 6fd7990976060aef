use crate::paint::{palette, Stroke};
use crate::render::DrawTarget;
use crate::scene::shapes::WaterwayShape;

pub(super) fn draw<T: DrawTarget + ?Sized>(shape: &WaterwayShape, target: &mut T) {
    if shape.area {
        target.fill_polygon(&shape.points, palette::LIGHT_BLUE);
    } else {
        target.stroke_polyline(&shape.points, Stroke::new(1.2, palette::LIGHT_BLUE));
    }
}
