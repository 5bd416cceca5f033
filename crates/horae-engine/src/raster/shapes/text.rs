use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::raster::Frame;
use crate::scene::{TextAnchor, TextCmd};
use crate::text::FontSystem;

/// Rasterizes a single line of text.
///
/// The anchor resolves horizontal placement; vertically the line is always
/// centered on the origin.
pub(crate) fn draw(frame: &mut Frame<'_>, cmd: &TextCmd, fonts: &FontSystem) {
    if cmd.text.is_empty() || cmd.size <= 0.0 || cmd.color.a <= 0.0 {
        return;
    }

    let Some(font) = fonts.get(cmd.font) else {
        log::warn!("unknown font id {:?}, skipping text draw", cmd.font);
        return;
    };

    let block = fonts.measure_text(&cmd.text, cmd.font, cmd.size);
    let left = match cmd.anchor {
        TextAnchor::Start => cmd.origin.x,
        TextAnchor::Middle => cmd.origin.x - block.x / 2.0,
    };
    let top = cmd.origin.y - block.y / 2.0;

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings {
        x: left,
        y: top,
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

    for glyph in layout
        .glyphs()
        .iter()
        .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
    {
        let (_, bitmap) = font.rasterize_config(glyph.key);
        let gx = glyph.x.round() as i32;
        let gy = glyph.y.round() as i32;

        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let coverage = f32::from(bitmap[row * glyph.width + col]) / 255.0;
                if coverage > 0.0 {
                    frame.blend_pixel(gx + col as i32, gy + row as i32, cmd.color, coverage);
                }
            }
        }
    }
}
