//! # Scene Module
//!
//! Value types the host scene graph takes ownership of. Nothing here keeps a
//! reference to a parent; attaching and detaching is the host's business.

mod group;

pub use group::{Group, SceneNode, Shape};

/// Object type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Helper object.
    Helper,
}
