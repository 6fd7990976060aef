use crate::coords::Vec2;
use crate::scene::ZIndex;

/// Country-level administrative boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderShape {
    pub points: Vec<Vec2>,
}

impl BorderShape {
    pub const Z: ZIndex = ZIndex::new(30);

    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}
