//! # Core Module
//!
//! Error types shared by every geometry builder in the crate.

mod error;

pub use error::{GeometryError, Result};
