use crate::paint::Color;

/// Mutable view over an RGBA8 framebuffer.
///
/// Row-major, 4 bytes per pixel, logical pixels mapping 1:1 to texels.
/// The canvas is opaque: every write leaves alpha at `0xff`.
pub struct Frame<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    /// Wraps a raw framebuffer. `data.len()` must equal `width * height * 4`.
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self { data, width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills the whole frame with an opaque color.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, _] = color.to_rgba_u8();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 0xff]);
        }
    }

    /// Source-over blends `color` into one pixel, with its alpha scaled by
    /// `coverage`.
    ///
    /// Out-of-bounds coordinates and sub-quantum contributions are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let a = (color.a * coverage).clamp(0.0, 1.0);
        if a < 1.0 / 255.0 {
            return;
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let dst = &mut self.data[idx..idx + 4];
        let inv = 1.0 - a;

        dst[0] = (color.r * 255.0 * a + dst[0] as f32 * inv).round() as u8;
        dst[1] = (color.g * 255.0 * a + dst[1] as f32 * inv).round() as u8;
        dst[2] = (color.b * 255.0 * a + dst[2] as f32 * inv).round() as u8;
        dst[3] = 0xff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_buf() -> Vec<u8> {
        vec![0u8; 4 * 4 * 4]
    }

    fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * width as usize + x as usize) * 4;
        [buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]]
    }

    #[test]
    fn clear_fills_opaque() {
        let mut buf = frame_buf();
        Frame::new(&mut buf, 4, 4).clear(Color::from_srgb(1.0, 0.0, 0.0, 0.25));
        // Clear ignores source alpha; the canvas is opaque.
        assert_eq!(pixel(&buf, 4, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&buf, 4, 3, 3), [255, 0, 0, 255]);
    }

    #[test]
    fn full_coverage_replaces() {
        let mut buf = frame_buf();
        let mut frame = Frame::new(&mut buf, 4, 4);
        frame.clear(Color::from_srgb(1.0, 1.0, 1.0, 1.0));
        frame.blend_pixel(1, 1, Color::from_srgb(0.0, 0.0, 0.0, 1.0), 1.0);
        assert_eq!(pixel(&buf, 4, 1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn half_coverage_mixes() {
        let mut buf = frame_buf();
        let mut frame = Frame::new(&mut buf, 4, 4);
        frame.clear(Color::from_srgb(1.0, 1.0, 1.0, 1.0));
        frame.blend_pixel(2, 2, Color::from_srgb(0.0, 0.0, 0.0, 1.0), 0.5);
        let [r, g, b, a] = pixel(&buf, 4, 2, 2);
        assert_eq!((r, g, b), (128, 128, 128));
        assert_eq!(a, 255);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut buf = frame_buf();
        let mut frame = Frame::new(&mut buf, 4, 4);
        frame.blend_pixel(-1, 0, Color::from_srgb(1.0, 0.0, 0.0, 1.0), 1.0);
        frame.blend_pixel(4, 0, Color::from_srgb(1.0, 0.0, 0.0, 1.0), 1.0);
        frame.blend_pixel(0, 99, Color::from_srgb(1.0, 0.0, 0.0, 1.0), 1.0);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
