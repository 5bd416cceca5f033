use std::sync::Arc;

use crate::coords::Vec2;
use crate::scene::{DrawCmd, NodeId, Scene, Tag, ZIndex};

/// Decoded RGBA image: straight alpha, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Wraps raw pixel data. `pixels.len()` must equal `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self { width, height, pixels }
    }
}

/// Image draw payload.
///
/// Pixels are blitted 1:1. Producers rasterize to the destination size up
/// front so the draw stage never rescales.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    /// Top-left corner in logical pixels.
    pub origin: Vec2,
    pub image: Arc<RasterImage>,
}

impl Scene {
    /// Appends an image blit.
    #[inline]
    pub fn push_image(&mut self, tag: Tag, z: ZIndex, origin: Vec2, image: Arc<RasterImage>) -> NodeId {
        self.append(tag, z, DrawCmd::Image(ImageCmd { origin, image }))
    }
}
