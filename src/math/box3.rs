//! Axis-aligned bounding box implementation.

use super::{Axis, Vector3};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// `min <= max` on every axis is a caller precondition and is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box3 {
    /// Minimum corner.
    pub min: Vector3,
    /// Maximum corner.
    pub max: Vector3,
}

impl Box3 {
    /// Create a new box.
    #[inline]
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Edge lengths, `max - min`. Negative components mean an unsorted box.
    #[inline]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Edge length along one axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        self.max.get(axis) - self.min.get(axis)
    }

    /// The 8 corners: the `max.z` face first, then the `min.z` face, each
    /// counter-clockwise from `(min.x, min.y)`.
    pub fn corners(&self) -> [Vector3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vector3::new(lo.x, lo.y, hi.z),
            Vector3::new(hi.x, lo.y, hi.z),
            Vector3::new(hi.x, hi.y, hi.z),
            Vector3::new(lo.x, hi.y, hi.z),
            Vector3::new(lo.x, lo.y, lo.z),
            Vector3::new(hi.x, lo.y, lo.z),
            Vector3::new(hi.x, hi.y, lo.z),
            Vector3::new(lo.x, hi.y, lo.z),
        ]
    }
}

impl std::fmt::Display for Box3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
