//! Material module: surface appearance of helper geometry.

mod fill;

pub use fill::{CullFace, FillAppearance, PolygonMode};
