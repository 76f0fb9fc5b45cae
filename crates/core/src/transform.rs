//! Axis-aligned bounding boxes for overlap and containment checks.

use crate::geometry::Dimension;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D axis-aligned bounding box with integer corners.
///
/// Boxes are half-open: two boxes that share a face do not intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D {
    /// Minimum corner.
    pub min: Vector3<u64>,
    /// Maximum corner.
    pub max: Vector3<u64>,
}

impl AABB3D {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: u64, min_y: u64, min_z: u64, max_x: u64, max_y: u64, max_z: u64) -> Self {
        Self {
            min: Vector3::new(min_x, min_y, min_z),
            max: Vector3::new(max_x, max_y, max_z),
        }
    }

    /// Creates an AABB with its min corner at `origin` and the given extents.
    pub fn from_origin(origin: &Vector3<u64>, extents: &Dimension) -> Self {
        Self {
            min: *origin,
            max: origin + extents.extents(),
        }
    }

    /// Returns the width (x dimension) of the AABB.
    pub fn width(&self) -> u64 {
        self.max.x - self.min.x
    }

    /// Returns the depth (y dimension) of the AABB.
    pub fn depth(&self) -> u64 {
        self.max.y - self.min.y
    }

    /// Returns the height (z dimension) of the AABB.
    pub fn height(&self) -> u64 {
        self.max.z - self.min.z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> u64 {
        self.width() * self.depth() * self.height()
    }

    /// Checks if this AABB shares interior volume with another AABB.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Checks if `other` lies entirely inside this AABB.
    pub fn contains(&self, other: &Self) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.min.z >= self.min.z
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
            && other.max.z <= self.max.z
    }
}
