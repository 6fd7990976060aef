use std::fmt;

/// Failure to turn a tile's shapes into pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No shape was ever merged into the extent, so there is nothing to fit.
    EmptyExtent,
    /// The extent spans zero (or a non-finite) distance on one axis; the
    /// fit scale would not be finite.
    DegenerateExtent { width: f32, height: f32 },
    /// The requested canvas has a zero pixel dimension.
    InvalidCanvasSize { width: u32, height: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyExtent => write!(f, "tile extent is empty; no shapes were classified"),
            RenderError::DegenerateExtent { width, height } => {
                write!(f, "tile extent is degenerate ({width} x {height}); cannot derive a scale")
            }
            RenderError::InvalidCanvasSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for RenderError {}
