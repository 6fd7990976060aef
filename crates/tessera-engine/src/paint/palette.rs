//! Named colors used by the map styles.

use super::Color;

pub const WHITE: Color = Color::opaque(255, 255, 255);
pub const BLACK: Color = Color::opaque(0, 0, 0);
pub const GRAY: Color = Color::opaque(128, 128, 128);
pub const LIGHT_GRAY: Color = Color::opaque(211, 211, 211);
pub const DARK_SLATE: Color = Color::opaque(47, 79, 79);

pub const GREEN: Color = Color::opaque(0, 128, 0);
pub const LIGHT_GREEN: Color = Color::opaque(144, 238, 144);
pub const DARK_GREEN: Color = Color::opaque(0, 100, 0);

pub const LIGHT_BLUE: Color = Color::opaque(173, 216, 230);
pub const LIGHT_CORAL: Color = Color::opaque(240, 128, 128);
pub const SANDY_BROWN: Color = Color::opaque(244, 164, 96);
pub const BROWN: Color = Color::opaque(165, 42, 42);
pub const YELLOW: Color = Color::opaque(255, 255, 0);

/// Fallback for features whose natural value is not recognized.
pub const MAGENTA: Color = Color::opaque(255, 0, 255);
