use crate::coords::Vec2;
use crate::raster::Frame;
use crate::scene::CircleCmd;

/// Rasterizes a filled disc with an antialiased edge.
pub(crate) fn draw(frame: &mut Frame<'_>, cmd: &CircleCmd) {
    if cmd.radius <= 0.0 || cmd.color.a <= 0.0 {
        return;
    }

    let reach = cmd.radius + 1.0;
    let min_x = (cmd.center.x - reach).floor() as i32;
    let max_x = (cmd.center.x + reach).ceil() as i32;
    let min_y = (cmd.center.y - reach).floor() as i32;
    let max_y = (cmd.center.y + reach).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32, y as f32);
            let dist = p.distance(cmd.center);

            let coverage = (cmd.radius - dist + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                frame.blend_pixel(x, y, cmd.color, coverage);
            }
        }
    }
}
