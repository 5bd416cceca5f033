//! Horae engine crate.
//!
//! This crate owns the platform + framebuffer runtime pieces used by higher layers.

pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod raster;
pub mod paint;
pub mod scene;
pub mod text;
pub mod tween;
