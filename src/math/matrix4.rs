//! 4x4 Matrix implementation.

use super::Vector3;
use serde::{Deserialize, Serialize};

/// A 4x4 matrix stored in column-major order.
/// Used for the local transforms of scene nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4 {
    /// Matrix elements in column-major order.
    /// [m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33]
    pub elements: [f32; 16],
}

impl Matrix4 {
    /// Extract the position (translation) component.
    #[inline]
    pub fn get_position(&self) -> Vector3 {
        Vector3::new(self.elements[12], self.elements[13], self.elements[14])
    }

    /// Set the position (translation) component, leaving rotation untouched.
    #[inline]
    pub fn set_position(&mut self, v: &Vector3) -> &mut Self {
        self.elements[12] = v.x;
        self.elements[13] = v.y;
        self.elements[14] = v.z;
        self
    }

    /// Create a rotation matrix around the X axis.
    pub fn from_rotation_x(theta: f32) -> Self {
        let c = theta.cos();
        let s = theta.sin();
        Self {
            elements: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c, s, 0.0,
                0.0, -s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Transform a Vector3 as a point (with translation).
    pub fn transform_point(&self, v: &Vector3) -> Vector3 {
        let e = &self.elements;
        let w = 1.0 / (e[3] * v.x + e[7] * v.y + e[11] * v.z + e[15]);
        Vector3 {
            x: (e[0] * v.x + e[4] * v.y + e[8] * v.z + e[12]) * w,
            y: (e[1] * v.x + e[5] * v.y + e[9] * v.z + e[13]) * w,
            z: (e[2] * v.x + e[6] * v.y + e[10] * v.z + e[14]) * w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_half_turn_about_x_flips_y_and_z() {
        let m = Matrix4::from_rotation_x(PI);
        let p = m.transform_point(&Vector3::new(1.0, 2.0, 3.0));
        assert!(p.approx_eq(&Vector3::new(1.0, -2.0, -3.0), 1e-5));
    }

    #[test]
    fn test_set_position_keeps_rotation() {
        let mut m = Matrix4::from_rotation_x(PI);
        m.set_position(&Vector3::new(5.0, 0.0, 0.0));
        assert_eq!(m.get_position(), Vector3::new(5.0, 0.0, 0.0));
        let origin = m.transform_point(&Vector3::ZERO);
        assert!(origin.approx_eq(&Vector3::new(5.0, 0.0, 0.0), 1e-6));
    }
}
