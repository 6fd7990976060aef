use crate::coords::Vec2;
use crate::scene::ZIndex;

/// River, stream or water body.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterwayShape {
    pub points: Vec<Vec2>,
    /// Filled as a polygon when true, stroked as a line otherwise.
    pub area: bool,
}

impl WaterwayShape {
    pub const Z: ZIndex = ZIndex::new(40);

    #[inline]
    pub fn new(points: Vec<Vec2>, area: bool) -> Self {
        Self { points, area }
    }
}
