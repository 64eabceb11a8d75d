//! # Math Module
//!
//! The small slice of 3D math the gizmo needs: points, colors, boxes and
//! node transforms. Interoperates with `glam` through `From` conversions.

mod axis;
mod box3;
mod color;
mod matrix4;
mod vector3;

pub use axis::Axis;
pub use box3::Box3;
pub use color::Color;
pub use matrix4::Matrix4;
pub use vector3::Vector3;

/// Common math constants.
pub mod consts {
    /// Pi constant.
    pub const PI: f32 = std::f32::consts::PI;
}
