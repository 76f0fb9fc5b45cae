//! Box items and their expanded instances.

use u_packing_core::geometry::{Dimension, Geometry, GeometryId};
use u_packing_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular box to be packed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxItem {
    /// Unique identifier.
    id: GeometryId,

    /// Extents (width, depth, height) in their original orientation.
    dimension: Dimension,

    /// Number of copies to place.
    quantity: usize,
}

impl BoxItem {
    /// Creates a new box with the given ID and extents.
    pub fn new(id: impl Into<GeometryId>, width: u64, depth: u64, height: u64) -> Self {
        Self {
            id: id.into(),
            dimension: Dimension::new(width, depth, height),
            quantity: 1,
        }
    }

    /// Sets the quantity to place.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
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

impl Geometry for BoxItem {
    fn id(&self) -> &GeometryId {
        &self.id
    }

    fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    fn quantity(&self) -> usize {
        self.quantity
    }

    fn validate(&self) -> Result<()> {
        if self.dimension.is_empty() {
            return Err(Error::InvalidGeometry(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidGeometry(format!(
                "Quantity for '{}' must be at least 1",
                self.id
            )));
        }

        if self.dimension.checked_volume().is_none() {
            return Err(Error::InvalidGeometry(format!(
                "Volume of '{}' overflows",
                self.id
            )));
        }

        Ok(())
    }
}

/// One copy of a box, carrying its current trial orientation.
///
/// Pending sets hold these by value. Orientation changes made while
/// searching never touch the caller's [`BoxItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackItem {
    /// Index into the boxes slice.
    pub geometry_idx: usize,
    /// Instance number within that box's quantity.
    pub instance: usize,
    /// Current orientation.
    pub dimension: Dimension,
}

/// Expands each box by its quantity, in input order.
pub fn build_instances(geometries: &[BoxItem]) -> Vec<PackItem> {
    let mut instances = Vec::new();
    for (geometry_idx, geom) in geometries.iter().enumerate() {
        for instance in 0..geom.quantity() {
            instances.push(PackItem {
                geometry_idx,
                instance,
                dimension: *geom.dimension(),
            });
        }
    }
    instances
}

/// Sums the volume of all instances, failing on overflow.
pub fn total_volume(instances: &[PackItem]) -> Result<u64> {
    instances.iter().try_fold(0u64, |acc, item| {
        item.dimension
            .checked_volume()
            .and_then(|v| acc.checked_add(v))
            .ok_or_else(|| Error::InvalidGeometry("Total box volume overflows".into()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_volume() {
        let item = BoxItem::new("B1", 10, 20, 30);
        assert_eq!(item.measure(), 6000);
    }

    #[test]
    fn test_validation() {
        assert!(BoxItem::new("B1", 10, 20, 30).validate().is_ok());
        assert!(BoxItem::new("B2", 0, 20, 30).validate().is_err());
        assert!(BoxItem::new("B3", 10, 20, 30)
            .with_quantity(0)
            .validate()
            .is_err());
        assert!(BoxItem::new("B4", u64::MAX, 2, 2).validate().is_err());
    }

    #[test]
    fn test_build_instances() {
        let boxes = vec![
            BoxItem::new("A", 1, 2, 3).with_quantity(2),
            BoxItem::new("B", 4, 5, 6),
        ];
        let instances = build_instances(&boxes);
        assert_eq!(instances.len(), 3);
        assert_eq!((instances[0].geometry_idx, instances[0].instance), (0, 0));
        assert_eq!((instances[1].geometry_idx, instances[1].instance), (0, 1));
        assert_eq!((instances[2].geometry_idx, instances[2].instance), (1, 0));
        assert_eq!(instances[2].dimension, Dimension::new(4, 5, 6));
    }

    #[test]
    fn test_total_volume() {
        let boxes = vec![BoxItem::new("A", 2, 2, 2).with_quantity(3)];
        assert_eq!(total_volume(&build_instances(&boxes)).unwrap(), 24);

        let huge = vec![BoxItem::new("H", u64::MAX / 2, 1, 1).with_quantity(3)];
        assert!(total_volume(&build_instances(&huge)).is_err());
    }
}
