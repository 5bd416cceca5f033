use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::raster::Frame;
use crate::scene::ArcCmd;

use super::common::{dial_angle, dial_direction, draw_thick_line};

/// Rasterizes a stroked sector outline.
///
/// Collapsed sectors (equal angles) draw a single radial segment. Open
/// sectors draw both radial edges plus the rim sweep between them.
pub(crate) fn draw(frame: &mut Frame<'_>, cmd: &ArcCmd) {
    if cmd.stroke.width <= 0.0 || cmd.stroke.color.a <= 0.0 || cmd.radius <= 0.0 {
        return;
    }

    let start_tip = cmd.center + dial_direction(cmd.start_angle) * cmd.radius;
    draw_thick_line(frame, cmd.center, start_tip, cmd.stroke.width, cmd.stroke.color);

    if cmd.is_collapsed() {
        return;
    }

    let end_tip = cmd.center + dial_direction(cmd.end_angle) * cmd.radius;
    draw_thick_line(frame, cmd.center, end_tip, cmd.stroke.width, cmd.stroke.color);

    draw_rim(frame, cmd);
}

/// Sweeps the outer rim between the sector's end angles.
fn draw_rim(frame: &mut Frame<'_>, cmd: &ArcCmd) {
    let half = cmd.stroke.width / 2.0;
    let reach = cmd.radius + half + 1.0;

    let min_x = (cmd.center.x - reach).floor() as i32;
    let max_x = (cmd.center.x + reach).ceil() as i32;
    let min_y = (cmd.center.y - reach).floor() as i32;
    let max_y = (cmd.center.y + reach).ceil() as i32;

    let full_turn = (cmd.end_angle - cmd.start_angle).abs() >= TAU;
    let start = cmd.start_angle.rem_euclid(TAU);
    let end = cmd.end_angle.rem_euclid(TAU);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32, y as f32);

            let dist = p.distance(cmd.center);
            let coverage = (1.0 - ((dist - cmd.radius).abs() - half).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }

            let ang = dial_angle(cmd.center, p);
            let inside = full_turn
                || if start <= end {
                    ang >= start && ang <= end
                } else {
                    // Sweep wraps through 12 o'clock.
                    ang >= start || ang <= end
                };

            if inside {
                frame.blend_pixel(x, y, cmd.stroke.color, coverage);
            }
        }
    }
}
