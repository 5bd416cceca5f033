use crate::raster::Frame;
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
///
/// `'a` is the duration of the callback invocation; the frame borrows the
/// surface's pixel buffer for exactly that long.
pub struct FrameCtx<'a> {
    /// CPU framebuffer for this frame. Contents persist from the previous
    /// frame, so apps that redraw everything should start with a clear.
    pub frame: Frame<'a>,

    pub time: FrameTime,
}
