//! Coordinate types shared across the rasterizer and higher layers.
//!
//! Canonical space:
//! - Logical pixels, one framebuffer texel per logical pixel
//! - Origin top-left
//! - +X right, +Y down

mod vec2;

pub use vec2::Vec2;
