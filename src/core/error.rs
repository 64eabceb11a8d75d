//! Geometry construction errors.

use crate::math::Vector3;
use thiserror::Error;

/// Errors that can occur while building gizmo geometry.
///
/// Every variant is a broken caller precondition, never a transient failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A segment was requested whose start and end coincide.
    #[error("invalid geometry: can't create a line of length zero at {start}")]
    ZeroLengthSegment {
        /// The coincident start/end point.
        start: Vector3,
    },

    /// Tick marks were requested with a spacing that is not finite and positive.
    #[error("invalid geometry: tick spacing must be finite and positive, got {0}")]
    InvalidTickSpacing(f32),
}

/// Result alias for geometry construction.
pub type Result<T> = std::result::Result<T, GeometryError>;
