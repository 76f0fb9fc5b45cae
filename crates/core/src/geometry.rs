//! Geometry primitives and traits.
//!
//! Extents are unsigned integers so that "exactly the remaining height" and
//! volume bookkeeping are exact comparisons.

use crate::solver::RotationMode;
use crate::Result;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a box or container.
pub type GeometryId = String;

/// Axis permutations for the six axis-aligned orientations of a box.
/// Each entry is (width_axis, depth_axis, height_axis), applied to the
/// current orientation. The identity comes first so that ties keep the
/// current orientation.
const ORIENTATIONS: [(usize, usize, usize); 6] = [
    (0, 1, 2), // Current
    (1, 0, 2), // Rotated 90° around Z
    (0, 2, 1), // Rotated 90° around X
    (1, 2, 0), // Rotated 90° around X then Z
    (2, 0, 1), // Rotated 90° around Y
    (2, 1, 0), // Rotated 90° around Y then X
];

/// Extents of a box, container or free space: (width, depth, height).
///
/// Rotation helpers never mutate; they return the rotated extents, or `None`
/// when no allowed rotation fits the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    extents: Vector3<u64>,
}

impl Dimension {
    /// Creates new extents.
    pub fn new(width: u64, depth: u64, height: u64) -> Self {
        Self {
            extents: Vector3::new(width, depth, height),
        }
    }

    /// Returns the extents as a vector (width, depth, height).
    pub fn extents(&self) -> &Vector3<u64> {
        &self.extents
    }

    /// Returns the width.
    pub fn width(&self) -> u64 {
        self.extents.x
    }

    /// Returns the depth.
    pub fn depth(&self) -> u64 {
        self.extents.y
    }

    /// Returns the height.
    pub fn height(&self) -> u64 {
        self.extents.z
    }

    /// Returns width × depth × height.
    pub fn volume(&self) -> u64 {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// Returns the volume, or `None` if it does not fit in a `u64`.
    pub fn checked_volume(&self) -> Option<u64> {
        self.extents
            .x
            .checked_mul(self.extents.y)?
            .checked_mul(self.extents.z)
    }

    /// Returns width × depth.
    pub fn footprint(&self) -> u64 {
        self.extents.x * self.extents.y
    }

    /// Returns true if any extent is zero.
    pub fn is_empty(&self) -> bool {
        self.extents.iter().any(|&e| e == 0)
    }

    /// Returns the extents with width and depth swapped.
    pub fn rotate_2d(&self) -> Self {
        Self::new(self.depth(), self.width(), self.height())
    }

    /// Iterates over the six axis-aligned orientations, starting with the
    /// current one.
    pub fn orientations_3d(&self) -> impl Iterator<Item = Dimension> + '_ {
        ORIENTATIONS.iter().map(move |&(x, y, z)| {
            Dimension::new(self.extents[x], self.extents[y], self.extents[z])
        })
    }

    /// Returns true if these extents fit inside `space` without rotation.
    pub fn fits_exactly(&self, space: &Dimension) -> bool {
        self.width() <= space.width()
            && self.depth() <= space.depth()
            && self.height() <= space.height()
    }

    /// Returns true if the extents fit inside `space`, possibly after
    /// swapping width and depth. Height is never permuted.
    pub fn can_fit_inside_2d(&self, space: &Dimension) -> bool {
        self.fits_exactly(space) || self.rotate_2d().fits_exactly(space)
    }

    /// Returns true if any axis permutation fits inside `space`.
    pub fn can_fit_inside_3d(&self, space: &Dimension) -> bool {
        self.orientations_3d().any(|o| o.fits_exactly(space))
    }

    /// Fit test under the given rotation mode.
    pub fn can_fit_inside(&self, space: &Dimension, mode: RotationMode) -> bool {
        match mode {
            RotationMode::ThreeD => self.can_fit_inside_3d(space),
            RotationMode::TwoD => self.can_fit_inside_2d(space),
        }
    }

    /// Returns true if `item` fits inside these extents in 2D rotation.
    pub fn can_hold_2d(&self, item: &Dimension) -> bool {
        item.can_fit_inside_2d(self)
    }

    /// Returns true if `item` fits inside these extents in 3D rotation.
    pub fn can_hold_3d(&self, item: &Dimension) -> bool {
        item.can_fit_inside_3d(self)
    }

    /// Returns a 2D rotation that fits `space`, preferring the current one.
    pub fn fit_rotate_2d(&self, space: &Dimension) -> Option<Self> {
        if self.fits_exactly(space) {
            return Some(*self);
        }
        let rotated = self.rotate_2d();
        rotated.fits_exactly(space).then_some(rotated)
    }

    /// Returns the fitting 3D orientation with the smallest footprint.
    pub fn fit_rotate_3d_smallest_footprint(&self, space: &Dimension) -> Option<Self> {
        let mut best: Option<Dimension> = None;
        for o in self.orientations_3d().filter(|o| o.fits_exactly(space)) {
            if best.map_or(true, |b| o.footprint() < b.footprint()) {
                best = Some(o);
            }
        }
        best
    }

    /// Returns the fitting 3D orientation with the largest footprint.
    pub fn rotate_largest_footprint_3d(&self, space: &Dimension) -> Option<Self> {
        let mut best: Option<Dimension> = None;
        for o in self.orientations_3d().filter(|o| o.fits_exactly(space)) {
            if best.map_or(true, |b| o.footprint() > b.footprint()) {
                best = Some(o);
            }
        }
        best
    }

    /// Smallest-footprint fitting rotation under the given mode.
    ///
    /// In 2D mode the footprint is rotation invariant, so this is simply the
    /// fitting 2D rotation.
    pub fn fit_rotate_smallest_footprint(
        &self,
        space: &Dimension,
        mode: RotationMode,
    ) -> Option<Self> {
        match mode {
            RotationMode::ThreeD => self.fit_rotate_3d_smallest_footprint(space),
            RotationMode::TwoD => self.fit_rotate_2d(space),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width(), self.depth(), self.height())
    }
}

/// Trait for packable items.
pub trait Geometry {
    /// Returns the identifier.
    fn id(&self) -> &GeometryId;

    /// Returns the extents in their original orientation.
    fn dimension(&self) -> &Dimension;

    /// Returns the number of copies to place.
    fn quantity(&self) -> usize {
        1
    }

    /// Returns the volume of a single copy.
    fn measure(&self) -> u64 {
        self.dimension().volume()
    }

    /// Validates the geometry.
    fn validate(&self) -> Result<()>;
}

/// Trait for containers that items are packed into.
pub trait Boundary {
    /// Returns the identifier.
    fn id(&self) -> &GeometryId;

    /// Returns the inner extents.
    fn dimension(&self) -> &Dimension;

    /// Returns the inner volume.
    fn measure(&self) -> u64 {
        self.dimension().volume()
    }

    /// Returns true if `item` fits inside the boundary under `mode`.
    fn can_hold(&self, item: &Dimension, mode: RotationMode) -> bool {
        match mode {
            RotationMode::ThreeD => self.dimension().can_hold_3d(item),
            RotationMode::TwoD => self.dimension().can_hold_2d(item),
        }
    }

    /// Validates the boundary.
    fn validate(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_and_footprint() {
        let d = Dimension::new(2, 3, 4);
        assert_eq!(d.volume(), 24);
        assert_eq!(d.footprint(), 6);
        assert!(!d.is_empty());
        assert!(Dimension::new(2, 0, 4).is_empty());
    }

    #[test]
    fn test_checked_volume_overflow() {
        let d = Dimension::new(u64::MAX, 2, 1);
        assert_eq!(d.checked_volume(), None);
        assert_eq!(Dimension::new(5, 5, 5).checked_volume(), Some(125));
    }

    #[test]
    fn test_orientations() {
        let d = Dimension::new(1, 2, 3);
        let all: Vec<_> = d.orientations_3d().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], d);
        assert_eq!(all[1], d.rotate_2d());
        for o in &all {
            assert_eq!(o.volume(), 6);
        }
    }

    #[test]
    fn test_fit_2d_keeps_height() {
        let item = Dimension::new(4, 2, 3);
        let space = Dimension::new(2, 4, 3);
        assert!(!item.fits_exactly(&space));
        assert!(item.can_fit_inside_2d(&space));
        assert_eq!(item.fit_rotate_2d(&space), Some(Dimension::new(2, 4, 3)));

        // Only fits when laid on its side, which 2D rotation forbids.
        let low = Dimension::new(4, 4, 2);
        assert!(!item.can_fit_inside_2d(&low));
        assert!(item.can_fit_inside_3d(&low));
        assert_eq!(item.fit_rotate_2d(&low), None);
    }

    #[test]
    fn test_fit_rotate_2d_prefers_current() {
        let item = Dimension::new(2, 2, 1);
        let space = Dimension::new(5, 5, 5);
        assert_eq!(item.fit_rotate_2d(&space), Some(item));
    }

    #[test]
    fn test_smallest_and_largest_footprint() {
        let item = Dimension::new(1, 2, 3);
        let space = Dimension::new(10, 10, 10);

        let smallest = item.fit_rotate_3d_smallest_footprint(&space).unwrap();
        assert_eq!(smallest.footprint(), 2);
        assert_eq!(smallest.height(), 3);

        let largest = item.rotate_largest_footprint_3d(&space).unwrap();
        assert_eq!(largest.footprint(), 6);
        assert_eq!(largest.height(), 1);

        // A low space forces a flat orientation.
        let flat = Dimension::new(10, 10, 1);
        let smallest = item.fit_rotate_3d_smallest_footprint(&flat).unwrap();
        assert_eq!(smallest.height(), 1);
        assert_eq!(smallest.footprint(), 6);
    }

    #[test]
    fn test_no_fit_in_any_rotation() {
        let item = Dimension::new(6, 5, 5);
        let space = Dimension::new(5, 5, 5);
        assert!(!item.can_fit_inside_3d(&space));
        assert!(!space.can_hold_3d(&item));
        assert_eq!(item.rotate_largest_footprint_3d(&space), None);
        assert_eq!(item.fit_rotate_3d_smallest_footprint(&space), None);
    }

    #[test]
    fn test_mode_dispatch() {
        let item = Dimension::new(1, 1, 5);
        let space = Dimension::new(5, 5, 1);
        assert!(item.can_fit_inside(&space, RotationMode::ThreeD));
        assert!(!item.can_fit_inside(&space, RotationMode::TwoD));
        assert!(item
            .fit_rotate_smallest_footprint(&space, RotationMode::TwoD)
            .is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::new(1, 2, 3).to_string(), "1x2x3");
    }
}
