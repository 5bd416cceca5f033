//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and
//! application layers, so user code never touches runtime internals. Apps
//! receive a per-frame context and draw into its framebuffer.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
