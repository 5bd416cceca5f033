//! CPU rasterizer.
//!
//! Consumes `scene` draw streams and writes RGBA8 pixels directly into the
//! presented framebuffer.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - one logical pixel per framebuffer texel; the surface scales on resize

mod frame;
mod shapes;

pub use frame::Frame;

use crate::scene::{DrawCmd, Scene};
use crate::text::FontSystem;

/// Draws the scene into `frame`, back-to-front.
pub fn draw_scene(frame: &mut Frame<'_>, scene: &mut Scene, fonts: &FontSystem) {
    for node in scene.iter_in_paint_order() {
        match &node.cmd {
            DrawCmd::Arc(cmd) => shapes::arc::draw(frame, cmd),
            DrawCmd::Circle(cmd) => shapes::circle::draw(frame, cmd),
            DrawCmd::Text(cmd) => shapes::text::draw(frame, cmd, fonts),
            DrawCmd::Image(cmd) => shapes::image::draw(frame, cmd),
        }
    }
}
