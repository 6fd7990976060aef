//! Feature classification ("tessellation").
//!
//! Turns one [`RawFeature`] into at most one [`Shape`]. Decision order is
//! strict and first-match-wins:
//!
//! 1) national border predicate
//! 2) populated place predicate
//! 3) the feature's tags in stored order, each recognized key checked with its
//!    category rule (see [`rules`]); the first rule that yields a shape ends the
//!    scan
//!
//! Tag order is significant. A line tagged `highway=primary` then
//! `railway=rail` becomes a road; with the tags swapped it becomes a railway.

mod predicates;
pub mod rules;

use crate::coords::Extent;
use crate::feature::RawFeature;
use crate::scene::{Shape, ShapeKind, ShapeQueue};

/// Decides which shape `feature` becomes, without building it.
pub fn classify(feature: &RawFeature) -> Option<ShapeKind> {
    if predicates::is_border(feature) {
        return Some(ShapeKind::Border);
    }
    if predicates::is_populated_place(feature) {
        return Some(ShapeKind::PopulatedPlace);
    }

    feature
        .tags
        .iter()
        .find_map(|(key, value)| rules::category_rule(key).and_then(|rule| rule(feature, value)))
}

/// Classifies `feature`, queues the resulting shape and grows `extent` over
/// its screen coordinates.
///
/// Returns the kind of the queued shape. An unmatched feature leaves both
/// `extent` and `queue` untouched.
pub fn tessellate(
    feature: &RawFeature,
    extent: &mut Extent,
    queue: &mut ShapeQueue,
) -> Option<ShapeKind> {
    let Some(kind) = classify(feature) else {
        log::trace!("no shape for {:?} feature with {} tags", feature.geometry, feature.tags.len());
        return None;
    };

    let shape = Shape::from_feature(kind, feature);
    extent.include_all(shape.points());
    log::trace!("{kind:?} at {} ({} points)", shape.z_index(), shape.points().len());
    queue.push(shape);

    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::feature::{GeometryKind, TagKey};
    use crate::scene::GeoFeatureKind;

    fn feature(geometry: GeometryKind) -> RawFeature {
        RawFeature::new(geometry)
            .with_coordinate(46.0, 23.0)
            .with_coordinate(46.1, 23.2)
            .with_coordinate(46.2, 23.1)
    }

    fn kind_of(f: &RawFeature) -> Option<ShapeKind> {
        classify(f)
    }

    // ── predicates ────────────────────────────────────────────────────────

    #[test]
    fn border_wins_over_any_tag() {
        let f = feature(GeometryKind::Line)
            .with_tag(TagKey::Highway, "motorway")
            .with_tag(TagKey::Railway, "rail")
            .with_tag(TagKey::Boundary, "administrative")
            .with_tag(TagKey::AdminLevel, "2");
        assert_eq!(kind_of(&f), Some(ShapeKind::Border));
    }

    #[test]
    fn populated_place_before_tag_scan() {
        let f = feature(GeometryKind::Point)
            .with_tag(TagKey::Railway, "station")
            .with_tag(TagKey::Place, "city")
            .with_tag(TagKey::Name, "Cluj-Napoca");
        assert_eq!(kind_of(&f), Some(ShapeKind::PopulatedPlace));
    }

    // ── tag order ─────────────────────────────────────────────────────────

    #[test]
    fn first_matching_tag_wins() {
        let road_first = feature(GeometryKind::Line)
            .with_tag(TagKey::Highway, "primary")
            .with_tag(TagKey::Railway, "rail");
        assert_eq!(kind_of(&road_first), Some(ShapeKind::Road));

        let rail_first = feature(GeometryKind::Line)
            .with_tag(TagKey::Railway, "rail")
            .with_tag(TagKey::Highway, "primary");
        assert_eq!(kind_of(&rail_first), Some(ShapeKind::Railway));
    }

    #[test]
    fn declined_tag_lets_scan_continue() {
        let f = feature(GeometryKind::Line)
            .with_tag(TagKey::Name, "Somes")
            .with_tag(TagKey::Highway, "footway")
            .with_tag(TagKey::Water, "river");
        assert_eq!(kind_of(&f), Some(ShapeKind::Waterway { area: false }));
    }

    #[test]
    fn same_category_later_tag_is_still_scanned() {
        let f = feature(GeometryKind::Line)
            .with_tag(TagKey::Highway, "path")
            .with_tag(TagKey::Highway, "secondary");
        assert_eq!(kind_of(&f), Some(ShapeKind::Road));
    }

    #[test]
    fn match_stops_the_scan() {
        // Building would yield Residential, but the earlier land use already matched.
        let f = feature(GeometryKind::Polygon)
            .with_tag(TagKey::LandType, "meadow")
            .with_tag(TagKey::Building, "yes");
        assert_eq!(kind_of(&f), Some(ShapeKind::GeoFeature(GeoFeatureKind::Plain)));
    }

    // ── category rules ────────────────────────────────────────────────────

    #[test]
    fn water_point_is_never_a_waterway() {
        let f = feature(GeometryKind::Point).with_tag(TagKey::Water, "lake");
        assert_eq!(kind_of(&f), None);

        let pond = feature(GeometryKind::Polygon).with_tag(TagKey::Water, "pond");
        assert_eq!(kind_of(&pond), Some(ShapeKind::Waterway { area: true }));
    }

    #[test]
    fn forest_camp_is_forest_for_every_geometry() {
        for geometry in [GeometryKind::Point, GeometryKind::Line, GeometryKind::Polygon] {
            let f = feature(geometry).with_tag(TagKey::LandType, "forest_camp");
            assert_eq!(kind_of(&f), Some(ShapeKind::GeoFeature(GeoFeatureKind::Forest)));
        }
    }

    #[test]
    fn farmland_is_plain_only_as_polygon() {
        let poly = feature(GeometryKind::Polygon).with_tag(TagKey::LandType, "farmland");
        assert_eq!(kind_of(&poly), Some(ShapeKind::GeoFeature(GeoFeatureKind::Plain)));

        for geometry in [GeometryKind::Line, GeometryKind::Point] {
            let f = feature(geometry).with_tag(TagKey::LandType, "farmland");
            assert_eq!(kind_of(&f), None);
        }
    }

    #[test]
    fn natural_needs_polygon_and_maps_value() {
        let wood = feature(GeometryKind::Polygon).with_tag(TagKey::Natural, "wood");
        assert_eq!(kind_of(&wood), Some(ShapeKind::GeoFeature(GeoFeatureKind::Forest)));

        let tree_row = feature(GeometryKind::Line).with_tag(TagKey::Natural, "tree_row");
        assert_eq!(kind_of(&tree_row), None);
    }

    #[test]
    fn boundary_forest_prefix() {
        let f = feature(GeometryKind::Line).with_tag(TagKey::Boundary, "forest_compartment");
        assert_eq!(kind_of(&f), Some(ShapeKind::GeoFeature(GeoFeatureKind::Forest)));

        let park = feature(GeometryKind::Polygon).with_tag(TagKey::Boundary, "national_park");
        assert_eq!(kind_of(&park), None);
    }

    #[test]
    fn building_others_amenity_need_polygon() {
        for key in [TagKey::Building, TagKey::Others, TagKey::Amenity] {
            let area = feature(GeometryKind::Polygon).with_tag(key, "yes");
            assert_eq!(kind_of(&area), Some(ShapeKind::GeoFeature(GeoFeatureKind::Residential)));

            let line = feature(GeometryKind::Line).with_tag(key, "yes");
            assert_eq!(kind_of(&line), None);
        }
    }

    #[test]
    fn railway_matches_any_value_and_geometry() {
        let f = feature(GeometryKind::Point).with_tag(TagKey::Railway, "level_crossing");
        assert_eq!(kind_of(&f), Some(ShapeKind::Railway));
    }

    #[test]
    fn untagged_feature_yields_nothing() {
        assert_eq!(kind_of(&feature(GeometryKind::Polygon)), None);
    }

    // ── side effects ──────────────────────────────────────────────────────

    #[test]
    fn unmatched_feature_touches_nothing() {
        let mut extent = Extent::empty();
        let mut queue = ShapeQueue::new();
        let f = feature(GeometryKind::Line).with_tag(TagKey::Highway, "cycleway");

        assert_eq!(tessellate(&f, &mut extent, &mut queue), None);
        assert_eq!(extent, Extent::empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn extent_covers_all_produced_shapes() {
        let mut extent = Extent::empty();
        let mut queue = ShapeQueue::new();

        let road = RawFeature::new(GeometryKind::Line)
            .with_coordinate(10.0, 20.0)
            .with_coordinate(11.0, 21.0)
            .with_tag(TagKey::Highway, "trunk");
        let ignored = RawFeature::new(GeometryKind::Line)
            .with_coordinate(80.0, 170.0)
            .with_coordinate(-80.0, -170.0);
        let lake = RawFeature::new(GeometryKind::Polygon)
            .with_coordinate(9.0, 22.0)
            .with_coordinate(9.5, 22.5)
            .with_coordinate(9.0, 23.0)
            .with_tag(TagKey::Water, "lake");

        for f in [&road, &ignored, &lake] {
            tessellate(f, &mut extent, &mut queue);
        }

        let mut expected = Extent::empty();
        for p in road.screen_coordinates().into_iter().chain(lake.screen_coordinates()) {
            expected.include(p);
        }
        assert_eq!(extent, expected);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn single_point_shape_still_grows_extent() {
        let mut extent = Extent::empty();
        let mut queue = ShapeQueue::new();
        let place = RawFeature::new(GeometryKind::Point)
            .with_coordinate(0.0, 0.0)
            .with_tag(TagKey::Place, "town");

        assert_eq!(tessellate(&place, &mut extent, &mut queue), Some(ShapeKind::PopulatedPlace));
        assert_eq!(extent.min(), Vec2::zero());
        assert_eq!(extent.max(), Vec2::zero());
        assert_eq!(queue.len(), 1);
    }
}
