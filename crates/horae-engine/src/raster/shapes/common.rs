//! Shared helpers used by the shape rasterizers.

use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::raster::Frame;

/// Unit direction for a dial angle: 0 points at 12 o'clock, angles grow
/// clockwise.
#[inline]
pub(super) fn dial_direction(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), -angle.cos())
}

/// Dial angle of the vector from `center` to `p`, normalized to `[0, 2π)`.
#[inline]
pub(super) fn dial_angle(center: Vec2, p: Vec2) -> f32 {
    let d = p - center;
    d.x.atan2(-d.y).rem_euclid(TAU)
}

/// Draws an anti-aliased line of the given thickness between two points.
///
/// Coverage falls off linearly over one pixel past the half-thickness,
/// matching the edge treatment of the circle and rim rasterizers.
pub(super) fn draw_thick_line(
    frame: &mut Frame<'_>,
    a: Vec2,
    b: Vec2,
    thickness: f32,
    color: Color,
) {
    let pad = thickness.ceil() as i32 + 1;
    let min_x = a.x.min(b.x).floor() as i32 - pad;
    let max_x = a.x.max(b.x).ceil() as i32 + pad;
    let min_y = a.y.min(b.y).floor() as i32 - pad;
    let max_y = a.y.max(b.y).ceil() as i32 + pad;

    let d = b - a;
    let len_sq = d.x * d.x + d.y * d.y;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32, y as f32);

            // Project onto the segment; degenerate segments collapse to `a`.
            let t = if len_sq <= f32::EPSILON {
                0.0
            } else {
                (((p.x - a.x) * d.x + (p.y - a.y) * d.y) / len_sq).clamp(0.0, 1.0)
            };

            let dist = p.distance(a + d * t);
            let coverage = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if coverage > 0.0 {
                frame.blend_pixel(x, y, color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn dial_direction_cardinals() {
        let up = dial_direction(0.0);
        assert!(close(up.x, 0.0) && close(up.y, -1.0));

        let right = dial_direction(core::f32::consts::FRAC_PI_2);
        assert!(close(right.x, 1.0) && close(right.y, 0.0));

        let down = dial_direction(core::f32::consts::PI);
        assert!(close(down.x, 0.0) && close(down.y, 1.0));
    }

    #[test]
    fn dial_angle_inverts_direction() {
        let center = Vec2::new(10.0, 10.0);
        for i in 0..12 {
            let angle = i as f32 / 12.0 * TAU;
            let p = center + dial_direction(angle) * 5.0;
            assert!(close(dial_angle(center, p), angle));
        }
    }
}
