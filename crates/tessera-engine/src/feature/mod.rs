//! In-memory representation of one raw map feature.
//!
//! Produced by a feature-source reader, consumed by [`crate::tessellate`].
//! Tag order is preserved exactly as inserted: classification walks tags in
//! that order, so reordering them can change which shape a feature becomes.

mod geometry;
mod tags;

pub use geometry::{Coordinate, GeometryKind};
pub use tags::{TagKey, Tags};

use crate::coords::Vec2;

/// Geometry, coordinates and ordered tags of one source feature.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeature {
    pub geometry: GeometryKind,
    pub coordinates: Vec<Coordinate>,
    pub tags: Tags,
}

impl RawFeature {
    pub fn new(geometry: GeometryKind) -> Self {
        Self { geometry, coordinates: Vec::new(), tags: Tags::new() }
    }

    /// Appends one coordinate (degrees).
    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates.push(Coordinate::new(latitude, longitude));
        self
    }

    pub fn with_coordinates(mut self, coords: impl IntoIterator<Item = Coordinate>) -> Self {
        self.coordinates.extend(coords);
        self
    }

    /// Appends a tag after all existing ones.
    pub fn with_tag(mut self, key: TagKey, value: impl Into<String>) -> Self {
        self.tags.push(key, value);
        self
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.geometry == GeometryKind::Point
    }

    #[inline]
    pub fn is_polygon(&self) -> bool {
        self.geometry == GeometryKind::Polygon
    }

    /// Display name (`name` tag), if any.
    pub fn label(&self) -> Option<&str> {
        self.tags.first(TagKey::Name).filter(|s| !s.is_empty())
    }

    /// Coordinates projected to screen space, in source order.
    pub fn screen_coordinates(&self) -> Vec<Vec2> {
        self.coordinates.iter().map(|c| c.project()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_tag_order() {
        let f = RawFeature::new(GeometryKind::Line)
            .with_tag(TagKey::Railway, "rail")
            .with_tag(TagKey::Highway, "primary")
            .with_tag(TagKey::Railway, "tram");

        let keys: Vec<TagKey> = f.tags.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [TagKey::Railway, TagKey::Highway, TagKey::Railway]);
        assert_eq!(f.tags.first(TagKey::Railway), Some("rail"));
    }

    #[test]
    fn label_ignores_empty_name() {
        let named = RawFeature::new(GeometryKind::Point).with_tag(TagKey::Name, "Cluj");
        assert_eq!(named.label(), Some("Cluj"));

        let blank = RawFeature::new(GeometryKind::Point).with_tag(TagKey::Name, "");
        assert_eq!(blank.label(), None);
    }

    #[test]
    fn screen_coordinates_follow_source_order() {
        let f = RawFeature::new(GeometryKind::Line)
            .with_coordinate(0.0, 0.0)
            .with_coordinate(0.0, 1.0);
        let pts = f.screen_coordinates();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], Vec2::zero());
        assert!(pts[1].x > 0.0);
    }
}
