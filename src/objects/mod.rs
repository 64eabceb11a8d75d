//! Renderable objects module.
//!
//! Line segment buffers and text labels.

mod label;
mod line;

pub use label::*;
pub use line::*;
