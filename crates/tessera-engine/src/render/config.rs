use crate::paint::{palette, Color};

/// Output canvas configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Solid fill painted before any shape.
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: palette::WHITE,
        }
    }
}

impl RenderConfig {
    /// Default configuration at the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}
