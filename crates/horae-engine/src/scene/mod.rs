//! Scene (retained draw graph) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands across frames
//! - address node groups by tag for partial rebuilds
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod graph;
mod node;
mod order;
mod tag;

pub mod shapes;

pub use cmd::DrawCmd;
pub use graph::Scene;
pub use node::{Node, NodeId};
pub use order::{SortKey, ZIndex};
pub use shapes::Stroke;
pub use shapes::arc::ArcCmd;
pub use shapes::circle::CircleCmd;
pub use shapes::image::{ImageCmd, RasterImage};
pub use shapes::text::{TextAnchor, TextCmd};
pub use tag::Tag;
