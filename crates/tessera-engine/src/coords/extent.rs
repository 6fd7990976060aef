use super::Vec2;
use crate::error::RenderError;

/// Axis-aligned bounds of projected screen coordinates.
///
/// [`Extent::empty`] holds +inf/-inf sentinels so the first included point
/// defines both corners. Once any point has been included:
/// - `min_x <= max_x`
/// - `min_y <= max_y`
///
/// Extents built independently (e.g. one per worker) combine with
/// [`merge`](Self::merge); the result is the same as including every point
/// into a single extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

impl Extent {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    #[inline]
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// True until at least one point has been included.
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.min_x <= self.max_x && self.min_y <= self.max_y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Bottom-left corner in projected space.
    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.min_x, self.min_y)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.max_x, self.max_y)
    }

    #[inline]
    pub fn include(&mut self, p: Vec2) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn include_all(&mut self, points: &[Vec2]) {
        for &p in points {
            self.include(p);
        }
    }

    /// Grows `self` to cover `other`. Merging an empty extent is a no-op.
    #[inline]
    pub fn merge(&mut self, other: Extent) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    #[inline]
    pub fn merged(mut self, other: Extent) -> Self {
        self.merge(other);
        self
    }

    /// Uniform scale that fits this extent into a `width` x `height` canvas.
    ///
    /// Returns `min(width / dx, height / dy)`, so the binding axis fills the
    /// canvas and the aspect ratio is kept.
    pub fn fit_scale(self, width: f32, height: f32) -> Result<f32, RenderError> {
        if self.is_empty() {
            return Err(RenderError::EmptyExtent);
        }

        let (dx, dy) = (self.width(), self.height());
        if !(dx > 0.0 && dy > 0.0 && dx.is_finite() && dy.is_finite()) {
            return Err(RenderError::DegenerateExtent { width: dx, height: dy });
        }

        let scale = (width / dx).min(height / dy);
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::DegenerateExtent { width: dx, height: dy });
        }
        Ok(scale)
    }
}
