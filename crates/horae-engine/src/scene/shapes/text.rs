use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, NodeId, Scene, Tag, ZIndex};
use crate::text::FontId;

/// Horizontal anchoring of a text block relative to its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextAnchor {
    /// `origin.x` is the left edge of the text.
    Start,
    /// `origin.x` is the horizontal center of the text.
    Middle,
}

/// Text draw payload.
///
/// The block is always vertically centered on `origin.y`; `anchor` selects
/// the horizontal reference. There is no wrapping, labels are single-line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub origin: Vec2,
    pub anchor: TextAnchor,
}

impl Scene {
    /// Appends a text label.
    pub fn push_text(
        &mut self,
        tag: Tag,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        anchor: TextAnchor,
    ) -> NodeId {
        self.append(tag, z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
            anchor,
        }))
    }
}
