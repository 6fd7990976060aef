use crate::coords::Vec2;
use crate::scene::ZIndex;

/// Land cover class of a [`GeoFeatureShape`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeoFeatureKind {
    Plain,
    Hills,
    Mountains,
    Forest,
    Desert,
    Unknown,
    Water,
    Residential,
}

impl GeoFeatureKind {
    pub const fn z_index(self) -> ZIndex {
        match self {
            GeoFeatureKind::Unknown => ZIndex::new(8),
            GeoFeatureKind::Desert => ZIndex::new(9),
            GeoFeatureKind::Plain => ZIndex::new(10),
            GeoFeatureKind::Forest => ZIndex::new(11),
            GeoFeatureKind::Hills => ZIndex::new(12),
            GeoFeatureKind::Mountains => ZIndex::new(13),
            GeoFeatureKind::Water => ZIndex::new(40),
            GeoFeatureKind::Residential => ZIndex::new(41),
        }
    }

    /// Land cover for an OSM `natural=*` value.
    pub fn from_natural(value: &str) -> Self {
        match value {
            "fell" | "grassland" | "heath" | "moor" | "scrub" | "wetland" => GeoFeatureKind::Plain,
            "wood" | "tree_row" => GeoFeatureKind::Forest,
            "bare_rock" | "rock" | "scree" => GeoFeatureKind::Mountains,
            "beach" | "sand" => GeoFeatureKind::Desert,
            "water" => GeoFeatureKind::Water,
            _ => GeoFeatureKind::Unknown,
        }
    }
}

/// Land use / land cover area.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeatureShape {
    pub points: Vec<Vec2>,
    pub kind: GeoFeatureKind,
    /// Filled as a polygon when true, stroked as a line otherwise.
    pub area: bool,
}

impl GeoFeatureShape {
    #[inline]
    pub fn new(points: Vec<Vec2>, kind: GeoFeatureKind, area: bool) -> Self {
        Self { points, kind, area }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_values() {
        assert_eq!(GeoFeatureKind::from_natural("wood"), GeoFeatureKind::Forest);
        assert_eq!(GeoFeatureKind::from_natural("heath"), GeoFeatureKind::Plain);
        assert_eq!(GeoFeatureKind::from_natural("scree"), GeoFeatureKind::Mountains);
        assert_eq!(GeoFeatureKind::from_natural("beach"), GeoFeatureKind::Desert);
        assert_eq!(GeoFeatureKind::from_natural("water"), GeoFeatureKind::Water);
        assert_eq!(GeoFeatureKind::from_natural("glacier"), GeoFeatureKind::Unknown);
    }

    #[test]
    fn residential_paints_above_water() {
        assert!(GeoFeatureKind::Residential.z_index() > GeoFeatureKind::Water.z_index());
        assert!(GeoFeatureKind::Water.z_index() > GeoFeatureKind::Mountains.z_index());
    }
}
