use crate::paint::palette;
use crate::render::DrawTarget;
use crate::scene::shapes::PopulatedPlaceShape;

const HALO_RADIUS: f32 = 4.0;
const DOT_RADIUS: f32 = 2.5;

/// Marker dot at the place's first point. Labels are not rasterized.
pub(super) fn draw<T: DrawTarget + ?Sized>(shape: &PopulatedPlaceShape, target: &mut T) {
    let Some(&center) = shape.points.first() else { return };
    target.fill_circle(center, HALO_RADIUS, palette::WHITE);
    target.fill_circle(center, DOT_RADIUS, palette::DARK_SLATE);
}
