use crate::coords::Vec2;
use crate::scene::ZIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct RailwayShape {
    pub points: Vec<Vec2>,
}

impl RailwayShape {
    pub const Z: ZIndex = ZIndex::new(45);

    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}
