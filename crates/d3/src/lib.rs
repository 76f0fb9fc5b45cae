//! # U-Packing 3D
//!
//! Container selection and level-based 3D bin packing.
//!
//! Given boxes and a priority-ordered list of candidate containers, the
//! [`Packager`] finds the first container that holds every box and returns
//! a concrete placement (position and orientation) for each one.
//!
//! ```rust
//! use u_packing_d3::{BoxItem, ContainerSpec, Packager};
//!
//! let packager = Packager::with_defaults(vec![
//!     ContainerSpec::new("small", 5, 5, 5),
//!     ContainerSpec::new("large", 10, 10, 10),
//! ])?;
//!
//! let container = packager.pack(&[BoxItem::new("B1", 6, 6, 6)])?;
//! assert_eq!(container.map(|c| c.index()), Some(1));
//! # Ok::<(), u_packing_d3::Error>(())
//! ```

pub mod boundary;
pub mod container;
pub mod geometry;
pub mod packer;
pub mod selector;
pub mod space;
pub mod splitter;

// Re-exports
pub use boundary::ContainerSpec;
pub use container::{Container, Level, Placement};
pub use geometry::{BoxItem, PackItem};
pub use packer::Packager;
pub use space::{Space, Split};
pub use u_packing_core::{
    Dimension, Error, LevelOrder, PackConfig, PackSummary, Result, RotationMode,
};
