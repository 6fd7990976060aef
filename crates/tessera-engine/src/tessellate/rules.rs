//! Per-category classification rules.
//!
//! Each recognized tag key owns one rule. A rule sees the whole feature plus
//! the tag's value and either yields a shape kind or declines; declining lets
//! the scan move on to the feature's next tag.

use crate::feature::{RawFeature, TagKey};
use crate::scene::{GeoFeatureKind, ShapeKind};

type CategoryRule = fn(&RawFeature, &str) -> Option<ShapeKind>;

/// Highway values drawn as roads (prefix match).
pub const HIGHWAY_TYPES: &[&str] = &[
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "unclassified",
    "residential",
    "road",
];

const CATEGORY_RULES: &[(TagKey, CategoryRule)] = &[
    (TagKey::Highway, highway),
    (TagKey::Water, water),
    (TagKey::Railway, railway),
    (TagKey::Natural, natural),
    (TagKey::Boundary, boundary),
    (TagKey::LandType, land_type),
    (TagKey::Building, residential_area),
    (TagKey::Others, residential_area),
    (TagKey::Amenity, residential_area),
];

struct LandUseRule {
    prefixes: &'static [&'static str],
    polygon_only: bool,
    kind: GeoFeatureKind,
}

/// Evaluated top to bottom; the first row whose prefix matches wins.
const LAND_USE_RULES: &[LandUseRule] = &[
    LandUseRule {
        prefixes: &["forest", "orchard"],
        polygon_only: false,
        kind: GeoFeatureKind::Forest,
    },
    LandUseRule {
        prefixes: &[
            "residential",
            "cemetery",
            "industrial",
            "commercial",
            "square",
            "construction",
            "military",
            "quarry",
            "brownfield",
        ],
        polygon_only: true,
        kind: GeoFeatureKind::Residential,
    },
    LandUseRule {
        prefixes: &[
            "farm",
            "meadow",
            "grass",
            "greenfield",
            "recreation_ground",
            "winter_sports",
            "allotments",
        ],
        polygon_only: true,
        kind: GeoFeatureKind::Plain,
    },
    LandUseRule {
        prefixes: &["reservoir", "basin"],
        polygon_only: true,
        kind: GeoFeatureKind::Water,
    },
];

/// Rule for `key`, or `None` if the key selects no rule.
pub(crate) fn category_rule(key: TagKey) -> Option<CategoryRule> {
    CATEGORY_RULES.iter().find(|(k, _)| *k == key).map(|(_, rule)| *rule)
}

#[inline]
fn starts_with_any(value: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| value.starts_with(p))
}

fn highway(_: &RawFeature, value: &str) -> Option<ShapeKind> {
    starts_with_any(value, HIGHWAY_TYPES).then_some(ShapeKind::Road)
}

fn water(feature: &RawFeature, _: &str) -> Option<ShapeKind> {
    (!feature.is_point()).then(|| ShapeKind::Waterway { area: feature.is_polygon() })
}

fn railway(_: &RawFeature, _: &str) -> Option<ShapeKind> {
    Some(ShapeKind::Railway)
}

fn natural(feature: &RawFeature, value: &str) -> Option<ShapeKind> {
    feature
        .is_polygon()
        .then(|| ShapeKind::GeoFeature(GeoFeatureKind::from_natural(value)))
}

fn boundary(_: &RawFeature, value: &str) -> Option<ShapeKind> {
    value
        .starts_with("forest")
        .then_some(ShapeKind::GeoFeature(GeoFeatureKind::Forest))
}

fn land_type(feature: &RawFeature, value: &str) -> Option<ShapeKind> {
    LAND_USE_RULES
        .iter()
        .filter(|rule| !rule.polygon_only || feature.is_polygon())
        .find(|rule| starts_with_any(value, rule.prefixes))
        .map(|rule| ShapeKind::GeoFeature(rule.kind))
}

fn residential_area(feature: &RawFeature, _: &str) -> Option<ShapeKind> {
    feature
        .is_polygon()
        .then_some(ShapeKind::GeoFeature(GeoFeatureKind::Residential))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::GeometryKind;

    fn land(geometry: GeometryKind, value: &str) -> Option<ShapeKind> {
        land_type(&RawFeature::new(geometry), value)
    }

    #[test]
    fn only_classifying_keys_have_rules() {
        assert!(category_rule(TagKey::Highway).is_some());
        assert!(category_rule(TagKey::Amenity).is_some());
        assert!(category_rule(TagKey::Place).is_none());
        assert!(category_rule(TagKey::Name).is_none());
        assert!(category_rule(TagKey::Unrecognized).is_none());
    }

    #[test]
    fn highway_matches_by_prefix() {
        let f = RawFeature::new(GeometryKind::Line);
        assert_eq!(highway(&f, "primary_link"), Some(ShapeKind::Road));
        assert_eq!(highway(&f, "residential"), Some(ShapeKind::Road));
        assert_eq!(highway(&f, "footway"), None);
    }

    #[test]
    fn land_use_forest_ignores_geometry() {
        let forest = Some(ShapeKind::GeoFeature(GeoFeatureKind::Forest));
        assert_eq!(land(GeometryKind::Point, "orchard"), forest);
        assert_eq!(land(GeometryKind::Line, "forest_camp"), forest);
        assert_eq!(land(GeometryKind::Polygon, "forest"), forest);
    }

    #[test]
    fn land_use_rows_need_polygons() {
        let residential = Some(ShapeKind::GeoFeature(GeoFeatureKind::Residential));
        assert_eq!(land(GeometryKind::Polygon, "quarry"), residential);
        assert_eq!(land(GeometryKind::Line, "quarry"), None);

        let water = Some(ShapeKind::GeoFeature(GeoFeatureKind::Water));
        assert_eq!(land(GeometryKind::Polygon, "basin"), water);
        assert_eq!(land(GeometryKind::Point, "reservoir"), None);
    }

    #[test]
    fn land_use_unknown_value_declines() {
        assert_eq!(land(GeometryKind::Polygon, "railway"), None);
    }
}
