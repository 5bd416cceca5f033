//! Numeric text transitions.
//!
//! A tween drives the string payload of one text node from its currently
//! displayed value toward a target, rounding to whole numbers at every step
//! so the label counts through integers instead of sliding through decimals.
//!
//! Retargeting a node that is already animating restarts the transition from
//! whatever value is on screen at that moment, never from the old target.

use std::time::Duration;

use crate::scene::{NodeId, Scene};

struct NumberTween {
    node: NodeId,
    from: f64,
    to: f64,
    elapsed: f32,
    /// Seconds. Zero or negative means "apply immediately".
    duration: f32,
    /// Minimum digit count; shorter values are left-padded with zeros.
    pad: usize,
}

/// Set of in-flight numeric text transitions.
///
/// Owned by the application and advanced once per frame with the frame's
/// delta time.
#[derive(Default)]
pub struct Tweens {
    active: Vec<NumberTween>,
}

impl Tweens {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a transition on `node` toward `to`.
    ///
    /// The starting value is parsed from the node's current text, so a
    /// retarget mid-flight continues from the displayed number. Nodes whose
    /// text does not parse as a number start from zero.
    pub fn animate_number(
        &mut self,
        scene: &Scene,
        node: NodeId,
        to: f64,
        duration: Duration,
        pad: usize,
    ) {
        let Some(text) = scene.text(node) else {
            log::debug!("tween target {node:?} is not a text node; ignoring");
            return;
        };
        let from = text.trim().parse::<f64>().unwrap_or(0.0);

        // One tween per node: a retarget replaces the old transition.
        self.active.retain(|t| t.node != node);
        self.active.push(NumberTween {
            node,
            from,
            to,
            elapsed: 0.0,
            duration: duration.as_secs_f32(),
            pad,
        });
    }

    /// Advances all transitions by `dt` seconds, writing the interpolated
    /// values into the scene.
    ///
    /// Transitions whose node has disappeared are dropped silently.
    pub fn advance(&mut self, scene: &mut Scene, dt: f32) {
        self.active.retain_mut(|tw| {
            tw.elapsed += dt;

            let t = if tw.duration <= 0.0 {
                1.0
            } else {
                (tw.elapsed / tw.duration).min(1.0)
            };

            let value = interpolate_round(tw.from, tw.to, t);
            let written = scene.set_text(tw.node, format_padded(value, tw.pad));

            written && t < 1.0
        });
    }

    /// True while any transition is still in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Linear interpolation snapped to the nearest integer.
#[inline]
fn interpolate_round(from: f64, to: f64, t: f32) -> i64 {
    (from + (to - from) * f64::from(t)).round() as i64
}

/// Formats `value` left-padded with zeros to at least `pad` digits.
///
/// Values wider than `pad` are printed in full, not clamped.
#[inline]
fn format_padded(value: i64, pad: usize) -> String {
    format!("{value:0pad$}")
}
