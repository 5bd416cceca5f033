use crate::coords::Vec2;
use crate::scene::{DrawCmd, NodeId, Scene, Tag, ZIndex};

use super::Stroke;

/// Stroked circular-sector outline.
///
/// Angles are in radians, measured clockwise from 12 o'clock. When
/// `start_angle == end_angle` the sector collapses to a single radial
/// segment from center to rim, the standard dial-hand silhouette.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub stroke: Stroke,
}

impl ArcCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, start_angle: f32, end_angle: f32, stroke: Stroke) -> Self {
        Self { center, radius, start_angle, end_angle, stroke }
    }

    /// True when the sector has no angular extent and renders as a bare
    /// radial segment.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        (self.end_angle - self.start_angle).abs() < 1e-6
    }
}

impl Scene {
    /// Appends a stroked sector outline.
    #[inline]
    pub fn push_arc(
        &mut self,
        tag: Tag,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: Stroke,
    ) -> NodeId {
        self.append(tag, z, DrawCmd::Arc(ArcCmd::new(center, radius, start_angle, end_angle, stroke)))
    }

    /// Appends a collapsed sector: a single radial segment pointing at `angle`.
    #[inline]
    pub fn push_hand(
        &mut self,
        tag: Tag,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        angle: f32,
        stroke: Stroke,
    ) -> NodeId {
        self.push_arc(tag, z, center, radius, angle, angle, stroke)
    }
}
