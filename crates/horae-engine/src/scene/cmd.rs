use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::image::ImageCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command payload.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching rasterizer under `raster::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Arc(ArcCmd),
    Circle(CircleCmd),
    Text(TextCmd),
    Image(ImageCmd),
}
