//! Visual helpers for annotating scene content.

mod bounding_box;
mod ticks;

pub use bounding_box::{BoundingBoxConfig, BoundingBoxGizmo};
pub use ticks::{format_tick_value, nice_tick_distance, TickParams};
