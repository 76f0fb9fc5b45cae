//! Candidate container types.

use u_packing_core::geometry::{Boundary, Dimension, GeometryId};
use u_packing_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate container (box, pallet, shipping container) boxes may be
/// packed into.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerSpec {
    /// Unique identifier.
    id: GeometryId,

    /// Inner extents (width, depth, height).
    dimension: Dimension,
}

impl ContainerSpec {
    /// Creates a new container with the given ID and inner extents.
    pub fn new(id: impl Into<GeometryId>, width: u64, depth: u64, height: u64) -> Self {
        Self {
            id: id.into(),
            dimension: Dimension::new(width, depth, height),
        }
    }

    /// Returns the width.
    pub fn width(&self) -> u64 {
        self.dimension.width()
    }

    /// Returns the depth.
    pub fn depth(&self) -> u64 {
        self.dimension.depth()
    }

    /// Returns the height.
    pub fn height(&self) -> u64 {
        self.dimension.height()
    }
}

impl Boundary for ContainerSpec {
    fn id(&self) -> &GeometryId {
        &self.id
    }

    fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    fn validate(&self) -> Result<()> {
        if self.dimension.is_empty() {
            return Err(Error::InvalidBoundary(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.dimension.checked_volume().is_none() {
            return Err(Error::InvalidBoundary(format!(
                "Volume of '{}' overflows",
                self.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_packing_core::RotationMode;

    #[test]
    fn test_container_volume() {
        let spec = ContainerSpec::new("C1", 100, 80, 50);
        assert_eq!(spec.measure(), 400_000);
    }

    #[test]
    fn test_can_hold() {
        let spec = ContainerSpec::new("C1", 10, 10, 2);
        let tall = Dimension::new(2, 2, 10);
        assert!(spec.can_hold(&tall, RotationMode::ThreeD));
        assert!(!spec.can_hold(&tall, RotationMode::TwoD));
    }

    #[test]
    fn test_validation() {
        assert!(ContainerSpec::new("C1", 100, 80, 50).validate().is_ok());
        assert!(ContainerSpec::new("C2", 100, 0, 50).validate().is_err());
    }
}
