//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the CPU
//! framebuffer surface.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
