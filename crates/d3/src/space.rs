//! Free spaces and the splits that produce them.

use nalgebra::Vector3;
use u_packing_core::geometry::Dimension;
use u_packing_core::transform::AABB3D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A free rectangular region inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space {
    /// Extents (width, depth, height).
    dimension: Dimension,
    /// Min corner (x, y, z).
    origin: Vector3<u64>,
}

impl Space {
    /// Creates a new space with the given extents and origin.
    pub fn new(width: u64, depth: u64, height: u64, x: u64, y: u64, z: u64) -> Self {
        Self {
            dimension: Dimension::new(width, depth, height),
            origin: Vector3::new(x, y, z),
        }
    }

    /// Returns the extents.
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Returns the min corner.
    pub fn origin(&self) -> &Vector3<u64> {
        &self.origin
    }

    /// Returns the extent along x.
    pub fn width(&self) -> u64 {
        self.dimension.width()
    }

    /// Returns the extent along y.
    pub fn depth(&self) -> u64 {
        self.dimension.depth()
    }

    /// Returns the extent along z.
    pub fn height(&self) -> u64 {
        self.dimension.height()
    }

    /// Returns the x of the min corner.
    pub fn x(&self) -> u64 {
        self.origin.x
    }

    /// Returns the y of the min corner.
    pub fn y(&self) -> u64 {
        self.origin.y
    }

    /// Returns the z of the min corner.
    pub fn z(&self) -> u64 {
        self.origin.z
    }

    /// Returns true if any extent is zero.
    pub fn is_empty(&self) -> bool {
        self.dimension.is_empty()
    }

    /// Returns the volume.
    pub fn volume(&self) -> u64 {
        self.dimension.volume()
    }

    /// Returns the region as an AABB.
    pub fn aabb(&self) -> AABB3D {
        AABB3D::from_origin(&self.origin, &self.dimension)
    }
}

/// A leftover region paired with its remainder.
///
/// Together with the footprint of the box that was placed, `space` and
/// `remainder` exactly reconstitute the region they were cut from.
/// Choosing either half as the working space makes the other its remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Split {
    /// The working leftover.
    pub space: Space,
    /// The complement of `space` within the parent region, minus the box.
    pub remainder: Space,
    /// Whether the split assumes the placed box is rotated in the plane.
    pub rotated: bool,
}

impl Split {
    /// Returns the same split with the roles of the two halves swapped.
    pub fn reversed(&self) -> Self {
        Self {
            space: self.remainder,
            remainder: self.space,
            rotated: self.rotated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_accessors() {
        let space = Space::new(4, 5, 6, 1, 2, 3);
        assert_eq!((space.width(), space.depth(), space.height()), (4, 5, 6));
        assert_eq!((space.x(), space.y(), space.z()), (1, 2, 3));
        assert_eq!(space.volume(), 120);
        assert_eq!(space.aabb(), AABB3D::new(1, 2, 3, 5, 7, 9));
    }

    #[test]
    fn test_empty() {
        assert!(Space::new(0, 5, 6, 0, 0, 0).is_empty());
        assert!(!Space::new(1, 1, 1, 0, 0, 0).is_empty());
    }

    #[test]
    fn test_reversed_is_reciprocal() {
        let split = Split {
            space: Space::new(6, 10, 5, 4, 0, 0),
            remainder: Space::new(4, 7, 5, 0, 3, 0),
            rotated: false,
        };
        let reversed = split.reversed();
        assert_eq!(reversed.space, split.remainder);
        assert_eq!(reversed.remainder, split.space);
        assert_eq!(reversed.reversed(), split);
    }
}
