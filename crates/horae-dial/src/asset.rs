//! Face artwork loading.
//!
//! The clock face is a single static image, loaded once at startup and
//! rasterized straight to its on-screen size so the draw stage is a plain
//! blit. SVG sources scale cleanly through `resvg`; raster sources are
//! resampled through `image`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use horae_engine::scene::RasterImage;

/// Face-image load failure. Non-fatal by design: callers log and render a
/// blank face.
#[derive(Debug, Clone)]
pub struct AssetError(pub String);

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset error: {}", self.0)
    }
}

impl std::error::Error for AssetError {}

/// Loads the face artwork and rasterizes it to a `side`-by-`side` square of
/// straight-alpha RGBA pixels.
pub fn load_face_image(path: &Path, side: u32) -> Result<Arc<RasterImage>, AssetError> {
    let data = fs::read(path)
        .map_err(|e| AssetError(format!("read {}: {e}", path.display())))?;

    let image = if is_svg(path, &data) {
        rasterize_svg(&data, side)?
    } else {
        resample_raster(&data, side)?
    };

    Ok(Arc::new(image))
}

fn is_svg(path: &Path, data: &[u8]) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("svg"))
        || data.starts_with(b"<?xml")
        || data.starts_with(b"<svg")
}

fn rasterize_svg(data: &[u8], side: u32) -> Result<RasterImage, AssetError> {
    use resvg::usvg;

    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| AssetError(format!("parse svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(side, side)
        .ok_or_else(|| AssetError("zero-sized face raster".to_string()))?;

    let size = tree.size();
    let transform = resvg::tiny_skia::Transform::from_scale(
        side as f32 / size.width(),
        side as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia pixmaps are premultiplied; the scene wants straight alpha.
    let mut pixels = Vec::with_capacity((side as usize) * (side as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        pixels.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(RasterImage::new(side, side, pixels))
}

fn resample_raster(data: &[u8], side: u32) -> Result<RasterImage, AssetError> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| AssetError(format!("decode image: {e}")))?;

    let resized = decoded
        .resize_exact(side, side, image::imageops::FilterType::Triangle)
        .to_rgba8();

    Ok(RasterImage::new(side, side, resized.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_face_image(Path::new("/nonexistent/face.svg"), 64).unwrap_err();
        assert!(err.to_string().contains("face.svg"));
    }

    #[test]
    fn svg_rasterizes_at_destination_size() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;
        let img = rasterize_svg(svg, 32).unwrap();
        assert_eq!((img.width, img.height), (32, 32));

        // Center pixel carries the rect fill.
        let i = (16 * 32 + 16) * 4;
        assert_eq!(&img.pixels[i..i + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn raster_sources_resample_to_the_requested_square() {
        let mut png = std::io::Cursor::new(Vec::new());
        image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 64, 128, 255]))
            .write_to(&mut png, image::ImageFormat::Png)
            .unwrap();

        let img = resample_raster(png.get_ref(), 8).unwrap();
        assert_eq!((img.width, img.height), (8, 8));
        assert_eq!(img.pixels.len(), 8 * 8 * 4);
    }

    #[test]
    fn svg_detection_checks_extension_and_magic() {
        assert!(is_svg(Path::new("face.SVG"), b"whatever"));
        assert!(is_svg(Path::new("face.bin"), b"<?xml version=\"1.0\"?>"));
        assert!(!is_svg(Path::new("face.png"), b"\x89PNG\r\n"));
    }
}
