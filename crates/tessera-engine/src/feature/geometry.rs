use crate::coords::{mercator, Vec2};

/// Shape class of a source feature.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
}

/// Geographic position in degrees (WGS84).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Mercator-projected screen position.
    #[inline]
    pub fn project(self) -> Vec2 {
        mercator::project(self.latitude, self.longitude)
    }
}
