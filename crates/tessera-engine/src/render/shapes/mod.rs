//! Per-variant map styles.

mod border;
mod geo_feature;
mod populated_place;
mod railway;
mod road;
mod waterway;

use crate::scene::Shape;

use super::DrawTarget;

/// Paints `shape` (already in pixel space) with its variant's style.
pub(crate) fn draw_shape<T: DrawTarget + ?Sized>(shape: &Shape, target: &mut T) {
    match shape {
        Shape::Border(s) => border::draw(s, target),
        Shape::PopulatedPlace(s) => populated_place::draw(s, target),
        Shape::Road(s) => road::draw(s, target),
        Shape::Waterway(s) => waterway::draw(s, target),
        Shape::Railway(s) => railway::draw(s, target),
        Shape::GeoFeature(s) => geo_feature::draw(s, target),
    }
}
