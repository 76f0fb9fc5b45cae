//! # U-Packing Core
//!
//! Core types and abstractions for the U-Packing container selection engine.
//!
//! This crate provides the foundational types shared by the packing crates:
//!
//! - **Geometry**: `Dimension` extents with rotation and fit queries, and the
//!   `Geometry`/`Boundary` traits implemented by boxes and containers
//! - **AABBs**: integer axis-aligned boxes for overlap and containment checks
//! - **Configuration**: `PackConfig`, `RotationMode`, `LevelOrder`
//! - **Results**: `PackSummary`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;
pub mod transform;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Boundary, Dimension, Geometry, GeometryId};
pub use result::PackSummary;
pub use solver::{LevelOrder, PackConfig, RotationMode};
pub use transform::AABB3D;
