use crate::coords::Extent;
use crate::error::RenderError;
use crate::paint::Color;
use crate::scene::ShapeQueue;

use super::{Canvas, DrawTarget, RenderConfig};

/// Shapes with fewer points than this cannot be drawn and are skipped.
const MIN_DRAWABLE_POINTS: usize = 2;

/// Outcome of one compositing pass.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CompositeStats {
    /// Shapes handed to their style.
    pub drawn: usize,
    /// Degenerate shapes (fewer than two points) that were dropped.
    pub skipped: usize,
    /// Projected units to pixels.
    pub scale: f32,
}

/// Rasterizes `queue` onto a new `width` x `height` canvas with a white background.
pub fn composite(
    queue: ShapeQueue,
    extent: &Extent,
    width: u32,
    height: u32,
) -> Result<Canvas, RenderError> {
    composite_with(queue, extent, &RenderConfig::new(width, height))
}

/// Rasterizes `queue` onto a new canvas described by `config`.
pub fn composite_with(
    queue: ShapeQueue,
    extent: &Extent,
    config: &RenderConfig,
) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(config.width, config.height)?;
    let stats = composite_onto(queue, extent, &mut canvas, config.background)?;

    log::debug!(
        "composited {}x{} tile: {} drawn, {} skipped, scale {}",
        config.width,
        config.height,
        stats.drawn,
        stats.skipped,
        stats.scale
    );
    Ok(canvas)
}

/// Paints every queued shape onto `target` in ascending z-order.
///
/// Steps:
/// 1) derive one uniform scale fitting `extent` into the target
/// 2) fill the background
/// 3) pop shapes lowest-z first; skip those with fewer than two points,
///    move the rest into pixel space and draw them
///
/// The queue is consumed. On a degenerate `extent` nothing is drawn.
pub fn composite_onto<T: DrawTarget + ?Sized>(
    mut queue: ShapeQueue,
    extent: &Extent,
    target: &mut T,
    background: Color,
) -> Result<CompositeStats, RenderError> {
    let (width, height) = target.size();
    let scale = extent.fit_scale(width as f32, height as f32)?;
    let origin = extent.min();

    target.fill(background);

    let mut stats = CompositeStats { scale, ..CompositeStats::default() };
    while let Some(mut shape) = queue.pop() {
        if shape.points().len() < MIN_DRAWABLE_POINTS {
            log::trace!("skipping degenerate {:?} ({} points)", shape.kind(), shape.points().len());
            stats.skipped += 1;
            continue;
        }

        shape.translate_and_scale(origin, scale, height as f32);
        shape.draw(target);
        stats.drawn += 1;
    }

    Ok(stats)
}
