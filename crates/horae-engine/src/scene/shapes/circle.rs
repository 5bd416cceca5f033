use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, NodeId, Scene, Tag, ZIndex};

/// Filled circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl Scene {
    /// Appends a filled circle.
    #[inline]
    pub fn push_circle(
        &mut self,
        tag: Tag,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        color: Color,
    ) -> NodeId {
        self.append(tag, z, DrawCmd::Circle(CircleCmd::new(center, radius, color)))
    }
}
