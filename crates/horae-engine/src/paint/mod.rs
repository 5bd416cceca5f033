//! Paint model shared between the scene and the rasterizer.
//!
//! Scope:
//! - color representation (straight alpha, `[0, 1]` channels)
//!
//! Geometry types remain in `coords`; per-shape stroke settings live with the
//! shape payloads in `scene::shapes`.

pub mod color;

pub use color::Color;
