use crate::paint::{palette, Color, Stroke};
use crate::render::DrawTarget;
use crate::scene::shapes::{GeoFeatureKind, GeoFeatureShape};

fn color(kind: GeoFeatureKind) -> Color {
    match kind {
        GeoFeatureKind::Plain => palette::LIGHT_GREEN,
        GeoFeatureKind::Hills => palette::DARK_GREEN,
        GeoFeatureKind::Mountains => palette::LIGHT_GRAY,
        GeoFeatureKind::Forest => palette::GREEN,
        GeoFeatureKind::Desert => palette::SANDY_BROWN,
        GeoFeatureKind::Unknown => palette::MAGENTA,
        GeoFeatureKind::Water => palette::LIGHT_BLUE,
        GeoFeatureKind::Residential => palette::LIGHT_CORAL,
    }
}

pub(super) fn draw<T: DrawTarget + ?Sized>(shape: &GeoFeatureShape, target: &mut T) {
    let color = color(shape.kind);
    if shape.area {
        target.fill_polygon(&shape.points, color);
    } else {
        target.stroke_polyline(&shape.points, Stroke::new(1.2, color));
    }
}
