//! # U-Packing
//!
//! Container selection and 3D bin packing for logistics.
//!
//! Decides whether an order fits into one of a list of candidate boxes,
//! pallets or containers, and how the items should be arranged.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use u_packing::d3::{BoxItem, ContainerSpec, Packager};
//!
//! let packager = Packager::with_defaults(vec![ContainerSpec::new("C1", 10, 10, 10)])?;
//! match packager.pack(&[BoxItem::new("B1", 6, 10, 10), BoxItem::new("B2", 4, 10, 10)])? {
//!     Some(container) => println!("{:?}", container.summary()),
//!     None => println!("does not fit"),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): 3D bin packing algorithms
//! - `serde`: Serialization support

/// Core types and abstractions.
pub use u_packing_core as core;

/// 3D bin packing algorithms.
#[cfg(feature = "d3")]
pub use u_packing_d3 as d3;

// Re-export commonly used types at root level
pub use u_packing_core::{
    Dimension, Error, LevelOrder, PackConfig, PackSummary, Result, RotationMode,
};
