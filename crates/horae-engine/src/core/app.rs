use std::time::Instant;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per presented frame. Draw into `ctx.frame`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Earliest instant at which the app needs another frame.
    ///
    /// `None` requests continuous redraw. Apps that animate on a coarse
    /// schedule return a deadline instead, letting the runtime sleep
    /// between frames rather than spin.
    fn next_wake(&self, now: Instant) -> Option<Instant> {
        let _ = now;
        None
    }
}
