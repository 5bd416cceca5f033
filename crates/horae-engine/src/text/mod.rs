//! Font loading and text measurement.
//!
//! Glyph rasterization happens in `raster::shapes::text`; this module only
//! owns the parsed fonts and the layout-based measurement used for anchoring.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
