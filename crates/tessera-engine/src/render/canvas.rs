use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, StrokeDash, Transform};

use crate::coords::Vec2;
use crate::error::RenderError;
use crate::paint::{Color, Stroke};

use super::DrawTarget;

/// Raster tile backed by a `tiny_skia::Pixmap` (premultiplied RGBA8).
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidCanvasSize { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA of one pixel, `None` when out of bounds.
    pub fn pixel_rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // `Pixmap::pixel` only bounds-checks the flattened index.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Row-major straight-alpha RGBA8 buffer, the layout image encoders expect.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn polyline_path(points: &[Vec2], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

impl DrawTarget for Canvas {
    #[inline]
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn fill(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let Some(path) = polyline_path(points, false) else {
            log::trace!("stroke_polyline: degenerate path ({} points)", points.len());
            return;
        };

        let mut sk_stroke = tiny_skia::Stroke {
            width: stroke.width,
            line_cap: tiny_skia::LineCap::Round,
            line_join: tiny_skia::LineJoin::Round,
            ..tiny_skia::Stroke::default()
        };
        if let Some([on, off]) = stroke.dash {
            sk_stroke.dash = StrokeDash::new(vec![on, off], 0.0);
        }

        self.pixmap
            .stroke_path(&path, &solid_paint(stroke.color), &sk_stroke, Transform::identity(), None);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some(path) = polyline_path(points, true) else {
            log::trace!("fill_polygon: degenerate path ({} points)", points.len());
            return;
        };
        self.pixmap
            .fill_path(&path, &solid_paint(color), FillRule::Winding, Transform::identity(), None);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.pixmap
            .fill_path(&path, &solid_paint(color), FillRule::Winding, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::palette;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Canvas::new(0, 10), Err(RenderError::InvalidCanvasSize { width: 0, height: 10 }));
    }

    #[test]
    fn fill_sets_every_pixel() {
        let mut c = Canvas::new(4, 3).unwrap();
        c.fill(palette::WHITE);
        assert!(c.to_rgba8().chunks(4).all(|px| px == [255, 255, 255, 255]));
        assert_eq!(c.to_rgba8().len(), 4 * 3 * 4);
    }

    #[test]
    fn polygon_covers_interior() {
        let mut c = Canvas::new(20, 20).unwrap();
        c.fill(palette::WHITE);
        c.fill_polygon(
            &[Vec2::new(2.0, 2.0), Vec2::new(18.0, 2.0), Vec2::new(18.0, 18.0), Vec2::new(2.0, 18.0)],
            palette::BLACK,
        );
        assert_eq!(c.pixel_rgba(10, 10), Some([0, 0, 0, 255]));
        assert_eq!(c.pixel_rgba(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn stroke_marks_line_pixels() {
        let mut c = Canvas::new(20, 20).unwrap();
        c.fill(palette::WHITE);
        c.stroke_polyline(&[Vec2::new(0.0, 10.0), Vec2::new(20.0, 10.0)], Stroke::new(4.0, palette::BLACK));
        assert_eq!(c.pixel_rgba(10, 10), Some([0, 0, 0, 255]));
        assert_eq!(c.pixel_rgba(10, 2), Some([255, 255, 255, 255]));
    }

    #[test]
    fn single_point_polyline_is_ignored() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.fill(palette::WHITE);
        let before = c.clone();
        c.stroke_polyline(&[Vec2::new(4.0, 4.0)], Stroke::new(2.0, palette::BLACK));
        c.fill_polygon(&[], palette::BLACK);
        assert_eq!(c, before);
    }

    #[test]
    fn out_of_bounds_pixel_is_none() {
        let c = Canvas::new(2, 2).unwrap();
        assert_eq!(c.pixel_rgba(2, 0), None);
        assert_eq!(c.pixel_rgba(0, 2), None);
        assert_eq!(c.pixel_rgba(1, 1), Some([0, 0, 0, 0]));
    }
}
