use crate::coords::Vec2;
use crate::scene::ZIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct RoadShape {
    pub points: Vec<Vec2>,
}

impl RoadShape {
    pub const Z: ZIndex = ZIndex::new(50);

    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}
