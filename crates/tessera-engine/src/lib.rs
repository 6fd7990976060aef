//! Tessera engine crate.
//!
//! Classifies the vector features of one map tile into drawable shapes and
//! rasterizes them back-to-front by z-index.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`feature`] | `RawFeature`, `GeometryKind`, `TagKey`, `Tags` |
//! | [`tessellate`] | `classify`, `tessellate` |
//! | [`scene`] | `Shape`, `ShapeKind`, `ShapeQueue`, `ZIndex` |
//! | [`render`] | `Canvas`, `DrawTarget`, `composite`, `RenderConfig` |
//! | [`tile`] | `TileScene` |
//!
//! # Quick start
//!
//! ```rust
//! use tessera_engine::feature::{GeometryKind, RawFeature, TagKey};
//! use tessera_engine::render::RenderConfig;
//! use tessera_engine::tile::TileScene;
//!
//! let road = RawFeature::new(GeometryKind::Line)
//!     .with_coordinate(46.77, 23.59)
//!     .with_coordinate(46.78, 23.60)
//!     .with_tag(TagKey::Highway, "primary");
//!
//! let mut scene = TileScene::new();
//! scene.add(&road);
//! let canvas = scene.render(&RenderConfig::new(256, 256)).unwrap();
//! assert_eq!(canvas.width(), 256);
//! ```

pub mod coords;
pub mod error;
pub mod feature;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod tessellate;
pub mod tile;

pub use error::RenderError;
