//! Time subsystem.
//!
//! Frame timing and coarse scheduling, kept free of runtime coupling so both
//! are unit-testable:
//! - one `FrameClock` per render loop, `tick()` once per presented frame
//! - `Interval` for work that runs on a fixed wall-clock period, far slower
//!   than the frame rate

mod frame_clock;
mod interval;

pub use frame_clock::{FrameClock, FrameTime};
pub use interval::Interval;
