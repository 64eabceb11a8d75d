//! # Ren BBox - labeled bounding boxes for the Ren 3D engine
//!
//! Builds a bounding-box annotation for scientific volume views: the 12 box
//! edges, tick marks along the three edges leaving the minimum corner, and
//! billboard coordinate labels at the first two ticks of each axis.
//!
//! ## Features
//!
//! - **Math**: Points, colors, boxes and node transforms
//! - **Objects**: Line segment buffers and billboard text labels
//! - **Scene**: Plain-value groups the host attaches to its own scene graph
//! - **Helpers**: The bounding box gizmo and its tick spacing rules
//!
//! ## Example
//!
//! ```ignore
//! use ren_bbox::prelude::*;
//!
//! let gizmo = BoundingBoxGizmo::with_color([0.0, 0.0, 0.0], [10.0, 4.0, 2.0], Color::YELLOW)?;
//! let group = gizmo.into_group();
//! for label in group.labels() {
//!     let glyphs = label.mesh(&my_text_mesher);
//!     scene.add_label(label.transform(), glyphs);
//! }
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod helpers;
pub mod material;
pub mod math;
pub mod objects;
pub mod scene;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::core::GeometryError;
    pub use crate::helpers::*;
    pub use crate::material::*;
    pub use crate::math::*;
    pub use crate::objects::*;
    pub use crate::scene::*;
}

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
