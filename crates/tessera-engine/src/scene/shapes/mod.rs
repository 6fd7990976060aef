//! Drawable shape variants.
//!
//! Extending the scene:
//! - add a new payload module under `scene::shapes::*`
//! - add a variant to [`Shape`] and [`ShapeKind`]
//! - add a matching style under `render::shapes::*`

mod border;
mod geo_feature;
mod populated_place;
mod railway;
mod road;
mod waterway;

pub use border::BorderShape;
pub use geo_feature::{GeoFeatureKind, GeoFeatureShape};
pub use populated_place::PopulatedPlaceShape;
pub use railway::RailwayShape;
pub use road::RoadShape;
pub use waterway::WaterwayShape;

use crate::coords::Vec2;
use crate::feature::RawFeature;
use crate::render::DrawTarget;
use crate::scene::ZIndex;

/// Which variant a feature classifies as, without its geometry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Border,
    PopulatedPlace,
    Road,
    /// `area` is true for polygon water bodies, false for water lines.
    Waterway { area: bool },
    Railway,
    GeoFeature(GeoFeatureKind),
}

/// A classified feature: projected points plus the variant's payload.
///
/// Points start in projected screen space and are moved into pixel space by
/// [`translate_and_scale`](Self::translate_and_scale) right before drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Border(BorderShape),
    PopulatedPlace(PopulatedPlaceShape),
    Road(RoadShape),
    Waterway(WaterwayShape),
    Railway(RailwayShape),
    GeoFeature(GeoFeatureShape),
}

impl Shape {
    /// Builds the shape `kind` from `feature`'s projected coordinates.
    pub fn from_feature(kind: ShapeKind, feature: &RawFeature) -> Self {
        let points = feature.screen_coordinates();
        match kind {
            ShapeKind::Border => Shape::Border(BorderShape::new(points)),
            ShapeKind::PopulatedPlace => Shape::PopulatedPlace(PopulatedPlaceShape::new(
                points,
                feature.label().map(str::to_owned),
            )),
            ShapeKind::Road => Shape::Road(RoadShape::new(points)),
            ShapeKind::Waterway { area } => Shape::Waterway(WaterwayShape::new(points, area)),
            ShapeKind::Railway => Shape::Railway(RailwayShape::new(points)),
            ShapeKind::GeoFeature(kind) => {
                Shape::GeoFeature(GeoFeatureShape::new(points, kind, feature.is_polygon()))
            }
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Border(_) => ShapeKind::Border,
            Shape::PopulatedPlace(_) => ShapeKind::PopulatedPlace,
            Shape::Road(_) => ShapeKind::Road,
            Shape::Waterway(w) => ShapeKind::Waterway { area: w.area },
            Shape::Railway(_) => ShapeKind::Railway,
            Shape::GeoFeature(g) => ShapeKind::GeoFeature(g.kind),
        }
    }

    pub fn z_index(&self) -> ZIndex {
        match self {
            Shape::Border(_) => BorderShape::Z,
            Shape::PopulatedPlace(_) => PopulatedPlaceShape::Z,
            Shape::Road(_) => RoadShape::Z,
            Shape::Waterway(_) => WaterwayShape::Z,
            Shape::Railway(_) => RailwayShape::Z,
            Shape::GeoFeature(g) => g.kind.z_index(),
        }
    }

    /// Current points: projected space before compositing, pixels after.
    pub fn points(&self) -> &[Vec2] {
        match self {
            Shape::Border(s) => &s.points,
            Shape::PopulatedPlace(s) => &s.points,
            Shape::Road(s) => &s.points,
            Shape::Waterway(s) => &s.points,
            Shape::Railway(s) => &s.points,
            Shape::GeoFeature(s) => &s.points,
        }
    }

    fn points_mut(&mut self) -> &mut [Vec2] {
        match self {
            Shape::Border(s) => &mut s.points,
            Shape::PopulatedPlace(s) => &mut s.points,
            Shape::Road(s) => &mut s.points,
            Shape::Waterway(s) => &mut s.points,
            Shape::Railway(s) => &mut s.points,
            Shape::GeoFeature(s) => &mut s.points,
        }
    }

    /// Moves points from projected space into pixel space.
    ///
    /// `origin` is the extent's bottom-left corner. Y is flipped against
    /// `height` because projected Y grows north while pixel Y grows down.
    pub fn translate_and_scale(&mut self, origin: Vec2, scale: f32, height: f32) {
        for p in self.points_mut() {
            let local = (*p - origin) * scale;
            *p = Vec2::new(local.x, height - local.y);
        }
    }

    /// Paints this shape with its variant's style.
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        crate::render::shapes::draw_shape(self, target);
    }
}
