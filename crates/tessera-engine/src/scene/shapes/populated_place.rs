use crate::coords::Vec2;
use crate::scene::ZIndex;

/// City, town, locality or hamlet marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedPlaceShape {
    pub points: Vec<Vec2>,
    /// Place name from the feature's `name` tag.
    pub label: Option<String>,
}

impl PopulatedPlaceShape {
    pub const Z: ZIndex = ZIndex::new(60);

    #[inline]
    pub fn new(points: Vec<Vec2>, label: Option<String>) -> Self {
        Self { points, label }
    }
}
