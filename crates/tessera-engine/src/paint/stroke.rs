use super::Color;

/// Stroke drawn along a polyline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Width in pixels.
    pub width: f32,
    pub color: Color,
    /// `[on, off]` dash lengths in pixels. `None` = solid.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color, dash: None }
    }

    #[inline]
    pub const fn dashed(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }
}
