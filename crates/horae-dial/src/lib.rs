//! Horae dial, an animated analog wall clock on top of `horae-engine`.
//!
//! The crate splits into the pure clock model (sampling, angle scales, the
//! derived counter, theme constants) and the parts that touch the engine
//! (dial renderer, asset loading, the `ClockApp` entry point).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use horae_dial::ClockApp;
//!
//! ClockApp::new()
//!     .title("horae")
//!     .width(900)
//!     .font(std::fs::read("DejaVuSans.ttf").unwrap_or_default())
//!     .face_image("assets/clock-face.svg")
//!     .run();
//! ```

pub mod app;
pub mod asset;
pub mod counter;
pub mod dial;
pub mod sample;
pub mod scale;
pub mod theme;

// Top-level re-exports for the common entry point.
pub use app::ClockApp;
pub use dial::DialRenderer;
pub use sample::{Clock, FixedClock, Sampler, SystemClock, TimeSample, Unit};
pub use scale::AngleScale;
pub use theme::Theme;
