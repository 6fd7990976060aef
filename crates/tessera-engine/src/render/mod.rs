//! CPU rasterization subsystem.
//!
//! The compositor drains a [`ShapeQueue`](crate::scene::ShapeQueue) onto any
//! [`DrawTarget`]; [`Canvas`] is the `tiny-skia` backed target used for real
//! output. Each shape variant's style lives in `render::shapes::*`.
//!
//! Convention:
//! - pixel geometry is top-left origin, +Y down
//! - colors are premultiplied (`paint::Color`)

mod canvas;
mod compositor;
mod config;
mod target;

pub(crate) mod shapes;

pub use canvas::Canvas;
pub use compositor::{composite, composite_onto, composite_with, CompositeStats};
pub use config::RenderConfig;
pub use target::DrawTarget;
