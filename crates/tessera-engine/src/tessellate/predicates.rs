use crate::feature::{RawFeature, TagKey};

const POPULATED_PLACES: &[&str] = &["city", "town", "locality", "hamlet"];

/// National border: `boundary=administrative*` together with `admin_level=2`.
pub(crate) fn is_border(feature: &RawFeature) -> bool {
    feature.tags.any(TagKey::Boundary, |v| v.starts_with("administrative"))
        && feature.tags.any(TagKey::AdminLevel, |v| v == "2")
}

/// Settlement node: a point tagged `place=city|town|locality|hamlet`.
pub(crate) fn is_populated_place(feature: &RawFeature) -> bool {
    feature.is_point() && feature.tags.any(TagKey::Place, |v| POPULATED_PLACES.contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::GeometryKind;

    #[test]
    fn border_needs_both_tags() {
        let both = RawFeature::new(GeometryKind::Line)
            .with_tag(TagKey::AdminLevel, "2")
            .with_tag(TagKey::Boundary, "administrative");
        assert!(is_border(&both));

        let level_only = RawFeature::new(GeometryKind::Line).with_tag(TagKey::AdminLevel, "2");
        assert!(!is_border(&level_only));

        let county = RawFeature::new(GeometryKind::Line)
            .with_tag(TagKey::Boundary, "administrative")
            .with_tag(TagKey::AdminLevel, "4");
        assert!(!is_border(&county));
    }

    #[test]
    fn populated_place_must_be_a_point() {
        let node = RawFeature::new(GeometryKind::Point).with_tag(TagKey::Place, "hamlet");
        assert!(is_populated_place(&node));

        let area = RawFeature::new(GeometryKind::Polygon).with_tag(TagKey::Place, "city");
        assert!(!is_populated_place(&area));

        let island = RawFeature::new(GeometryKind::Point).with_tag(TagKey::Place, "island");
        assert!(!is_populated_place(&island));
    }
}
