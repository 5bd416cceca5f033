use crate::paint::Color;
use crate::raster::Frame;
use crate::scene::ImageCmd;

/// Blits a pre-rasterized RGBA image, pixel for pixel.
///
/// Producers size the image for its destination before pushing it, so no
/// sampling happens here. Pixels carry straight alpha and blend over the
/// frame like any other primitive.
pub(crate) fn draw(frame: &mut Frame<'_>, cmd: &ImageCmd) {
    let ox = cmd.origin.x.round() as i32;
    let oy = cmd.origin.y.round() as i32;

    for row in 0..cmd.image.height {
        let y = oy + row as i32;
        if y < 0 || y >= frame.height() as i32 {
            continue;
        }

        let row_start = (row * cmd.image.width * 4) as usize;
        for col in 0..cmd.image.width {
            let px = &cmd.image.pixels[row_start + (col * 4) as usize..][..4];
            if px[3] == 0 {
                continue;
            }

            let color = Color::from_srgb_u8(px[0], px[1], px[2], px[3]);
            frame.blend_pixel(ox + col as i32, y, color, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::raster::Frame;
    use crate::scene::{ImageCmd, RasterImage};

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> Arc<RasterImage> {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Arc::new(RasterImage::new(width, height, pixels))
    }

    fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn opaque_pixels_replace_background() {
        let mut buf = vec![0u8; 8 * 8 * 4];
        let mut frame = Frame::new(&mut buf, 8, 8);
        frame.clear(Color::from_srgb_u8(0, 0, 0, 255));

        let cmd = ImageCmd {
            origin: Vec2::new(2.0, 2.0),
            image: solid_image(3, 3, [255, 0, 0, 255]),
        };
        super::draw(&mut frame, &cmd);

        assert_eq!(pixel(&buf, 8, 3, 3), [255, 0, 0, 255]);
        assert_eq!(pixel(&buf, 8, 1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn transparent_pixels_leave_background() {
        let mut buf = vec![0u8; 4 * 4 * 4];
        let mut frame = Frame::new(&mut buf, 4, 4);
        frame.clear(Color::from_srgb_u8(10, 20, 30, 255));

        let cmd = ImageCmd {
            origin: Vec2::zero(),
            image: solid_image(4, 4, [255, 255, 255, 0]),
        };
        super::draw(&mut frame, &cmd);

        assert_eq!(pixel(&buf, 4, 2, 2), [10, 20, 30, 255]);
    }

    #[test]
    fn negative_origin_clips_instead_of_wrapping() {
        let mut buf = vec![0u8; 4 * 4 * 4];
        let mut frame = Frame::new(&mut buf, 4, 4);
        frame.clear(Color::from_srgb_u8(0, 0, 0, 255));

        let cmd = ImageCmd {
            origin: Vec2::new(-2.0, -2.0),
            image: solid_image(4, 4, [0, 255, 0, 255]),
        };
        super::draw(&mut frame, &cmd);

        // Only the image's lower-right quadrant lands in the frame.
        assert_eq!(pixel(&buf, 4, 0, 0), [0, 255, 0, 255]);
        assert_eq!(pixel(&buf, 4, 1, 1), [0, 255, 0, 255]);
        assert_eq!(pixel(&buf, 4, 2, 2), [0, 0, 0, 255]);
    }
}
