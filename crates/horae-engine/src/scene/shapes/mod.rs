pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod text;

use crate::paint::Color;

/// Stroke drawn along a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
