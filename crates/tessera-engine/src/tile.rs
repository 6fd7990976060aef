//! One tile's worth of classified shapes.

use crate::coords::Extent;
use crate::error::RenderError;
use crate::feature::RawFeature;
use crate::render::{composite_with, Canvas, RenderConfig};
use crate::scene::{ShapeKind, ShapeQueue};
use crate::tessellate::tessellate;

/// Extent accumulator plus shape queue for one tile.
///
/// Classification mutates a single scene; independent scenes (e.g. one per
/// worker thread) combine with [`merge`](Self::merge) before rendering.
/// Rendering consumes the scene.
#[derive(Debug, Default)]
pub struct TileScene {
    extent: Extent,
    shapes: ShapeQueue,
}

impl TileScene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one feature into this scene.
    pub fn add(&mut self, feature: &RawFeature) -> Option<ShapeKind> {
        tessellate(feature, &mut self.extent, &mut self.shapes)
    }

    /// Classifies every feature; returns how many produced a shape.
    pub fn add_all<'a>(&mut self, features: impl IntoIterator<Item = &'a RawFeature>) -> usize {
        features.into_iter().filter_map(|f| self.add(f)).count()
    }

    /// Folds `other` into this scene.
    ///
    /// Extents merge componentwise; `other`'s shapes are queued after this
    /// scene's, so equal-z ties resolve in favor of `self`.
    pub fn merge(&mut self, other: TileScene) {
        self.extent.merge(other.extent);
        self.shapes.append(other.shapes);
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    pub fn shapes(&self) -> &ShapeQueue {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn into_parts(self) -> (ShapeQueue, Extent) {
        (self.shapes, self.extent)
    }

    /// Composites the scene onto a fresh canvas.
    pub fn render(self, config: &RenderConfig) -> Result<Canvas, RenderError> {
        log::debug!("rendering {} shapes over {:?}", self.shapes.len(), self.extent);
        composite_with(self.shapes, &self.extent, config)
    }
}
