//! Packing result: the chosen container, its levels and placements.

use crate::boundary::ContainerSpec;
use crate::space::Space;
use u_packing_core::geometry::{Boundary, Dimension, GeometryId};
use u_packing_core::transform::AABB3D;
use u_packing_core::{Error, PackSummary, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box instance fixed inside the region it was assigned.
///
/// The box occupies its committed extents at the region's origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    space: Space,
    geometry_id: GeometryId,
    instance: usize,
    dimension: Dimension,
}

impl Placement {
    /// Creates a placement of an oriented box in `space`.
    pub fn new(
        space: Space,
        geometry_id: GeometryId,
        instance: usize,
        dimension: Dimension,
    ) -> Self {
        Self {
            space,
            geometry_id,
            instance,
            dimension,
        }
    }

    /// Returns the region the box was assigned.
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Returns the ID of the placed box.
    pub fn geometry_id(&self) -> &GeometryId {
        &self.geometry_id
    }

    /// Returns the instance number of the placed box.
    pub fn instance(&self) -> usize {
        self.instance
    }

    /// Returns the committed extents of the box.
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Returns the min corner of the box (x, y, z).
    pub fn position(&self) -> (u64, u64, u64) {
        (self.space.x(), self.space.y(), self.space.z())
    }

    /// Returns the volume the box occupies.
    pub fn aabb(&self) -> AABB3D {
        AABB3D::from_origin(self.space.origin(), &self.dimension)
    }
}

/// A horizontal slab of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Level {
    z: u64,
    height: u64,
    placements: Vec<Placement>,
}

impl Level {
    /// Returns the bottom of the level.
    pub fn z(&self) -> u64 {
        self.z
    }

    /// Returns the height of the level, that of its seed box.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Returns the placements in the order they were fixed.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

/// A container holding every packed box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    spec: ContainerSpec,
    index: usize,
    levels: Vec<Level>,
    stack_height: u64,
    pub(crate) computation_time_ms: u64,
}

impl Container {
    /// Creates an empty container for the candidate at `index`.
    pub fn new(index: usize, spec: ContainerSpec) -> Self {
        Self {
            spec,
            index,
            levels: Vec::new(),
            stack_height: 0,
            computation_time_ms: 0,
        }
    }

    /// Returns the container spec.
    pub fn spec(&self) -> &ContainerSpec {
        &self.spec
    }

    /// Returns the index of the container in the candidate list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the levels, bottom first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns the total height of all levels.
    pub fn stack_height(&self) -> u64 {
        self.stack_height
    }

    /// Returns the footprint region above the top level.
    pub fn remaining_free_space(&self) -> Dimension {
        Dimension::new(
            self.spec.width(),
            self.spec.depth(),
            self.spec.height().saturating_sub(self.stack_height),
        )
    }

    /// Opens a new level of the given height on top of the stack.
    pub fn add_level(&mut self, height: u64) {
        self.levels.push(Level {
            z: self.stack_height,
            height,
            placements: Vec::new(),
        });
        self.stack_height += height;
    }

    /// Appends a placement to the current level.
    pub fn add(&mut self, placement: Placement) -> Result<()> {
        let level = self
            .levels
            .last_mut()
            .ok_or_else(|| Error::Internal("placement added before any level".into()))?;
        level.placements.push(placement);
        Ok(())
    }

    /// Iterates over all placements in the order they were fixed.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.levels.iter().flat_map(|level| level.placements.iter())
    }

    /// Returns the number of placed box instances.
    pub fn placed_count(&self) -> usize {
        self.levels.iter().map(|level| level.placements.len()).sum()
    }

    /// Returns the total volume of placed boxes.
    pub fn used_volume(&self) -> u64 {
        self.placements().map(|p| p.dimension.volume()).sum()
    }

    /// Returns used volume over container volume.
    pub fn utilization(&self) -> f64 {
        self.used_volume() as f64 / self.spec.measure() as f64
    }

    /// Returns the computation time of the pack in milliseconds.
    pub fn computation_time_ms(&self) -> u64 {
        self.computation_time_ms
    }

    /// Summarises the packing.
    pub fn summary(&self) -> PackSummary {
        PackSummary {
            container_id: self.spec.id().clone(),
            container_index: self.index,
            placed: self.placed_count(),
            levels: self.levels.len(),
            stack_height: self.stack_height,
            utilization: self.utilization(),
            computation_time_ms: self.computation_time_ms,
        }
    }

    /// Checks that every box lies in its region, every region lies in the
    /// container and no two boxes overlap.
    pub fn validate(&self) -> Result<()> {
        if self.stack_height > self.spec.height() {
            return Err(Error::Internal(format!(
                "stack height {} exceeds container height {}",
                self.stack_height,
                self.spec.height()
            )));
        }

        let bounds = AABB3D::from_origin(&nalgebra::Vector3::zeros(), self.spec.dimension());
        let boxes: Vec<(&Placement, AABB3D)> = self.placements().map(|p| (p, p.aabb())).collect();

        for (placement, aabb) in &boxes {
            if !placement.dimension.fits_exactly(placement.space.dimension()) {
                return Err(Error::Internal(format!(
                    "box '{}' #{} ({}) does not fit its region ({})",
                    placement.geometry_id,
                    placement.instance,
                    placement.dimension,
                    placement.space.dimension()
                )));
            }
            if !bounds.contains(&placement.space.aabb()) || !bounds.contains(aabb) {
                return Err(Error::Internal(format!(
                    "box '{}' #{} lies outside the container",
                    placement.geometry_id, placement.instance
                )));
            }
        }

        for (i, (a, a_box)) in boxes.iter().enumerate() {
            for (b, b_box) in &boxes[i + 1..] {
                if a_box.intersects(b_box) {
                    return Err(Error::Internal(format!(
                        "box '{}' #{} overlaps box '{}' #{}",
                        a.geometry_id, a.instance, b.geometry_id, b.instance
                    )));
                }
            }
        }

        Ok(())
    }
}
