pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod common;
pub(crate) mod image;
pub(crate) mod text;
