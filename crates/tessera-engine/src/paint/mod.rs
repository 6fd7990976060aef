//! Paint model shared between shape styles and the canvas.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - stroke description (width, color, optional dash)
//! - the named map palette

pub mod color;
pub mod palette;
mod stroke;

pub use color::Color;
pub use stroke::Stroke;
