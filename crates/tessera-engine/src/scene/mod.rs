//! Scene types: drawable shapes and their paint order.
//!
//! Responsibilities:
//! - model the closed set of shape variants a feature can become
//! - provide deterministic ordering (z-index + insertion sequence)
//! - keep per-variant payloads isolated in their own files under `scene::shapes`

mod key;
mod queue;
mod z_index;

pub mod shapes;

pub use key::SortKey;
pub use queue::ShapeQueue;
pub use shapes::{GeoFeatureKind, Shape, ShapeKind};
pub use z_index::ZIndex;
