//! Level-based container packer.
//!
//! Containers are tried in the order given; the first one that can hold
//! every box is committed to. Each container is filled one level at a time:
//! a seed box fixes the level height, then the level footprint is split
//! recursively around each placed box and the leftover regions are filled
//! best-fit by volume.

use crate::boundary::ContainerSpec;
use crate::container::{Container, Placement};
use crate::geometry::{build_instances, total_volume, BoxItem, PackItem};
use crate::selector::{best_volume, best_volume_placement};
use crate::space::Space;
use crate::splitter::free_spaces;
use std::time::Instant;
use u_packing_core::geometry::{Boundary, Dimension, Geometry};
use u_packing_core::solver::PackConfig;
use u_packing_core::{Error, Result};

/// Fits boxes into one of a list of candidate containers.
///
/// The packer holds no mutable state; `pack` may be called concurrently.
#[derive(Debug, Clone)]
pub struct Packager {
    containers: Vec<ContainerSpec>,
    config: PackConfig,
}

impl Packager {
    /// Creates a packer for the given containers, in priority order.
    pub fn new(containers: Vec<ContainerSpec>, config: PackConfig) -> Result<Self> {
        if containers.is_empty() {
            return Err(Error::ConfigError("At least one container is required".into()));
        }
        for container in &containers {
            container.validate()?;
        }

        Ok(Self { containers, config })
    }

    /// Creates a packer with 3D rotation and footprint-first levels.
    pub fn with_defaults(containers: Vec<ContainerSpec>) -> Result<Self> {
        Self::new(containers, PackConfig::default())
    }

    /// Packs all boxes into the first candidate container that holds them.
    ///
    /// Returns `Ok(None)` if no container fits. Errors are reserved for
    /// invalid input.
    pub fn pack(&self, boxes: &[BoxItem]) -> Result<Option<Container>> {
        let start = Instant::now();

        if boxes.is_empty() {
            return Err(Error::InvalidGeometry("No boxes to pack".into()));
        }
        for geom in boxes {
            geom.validate()?;
        }

        let instances = build_instances(boxes);
        let volume = total_volume(&instances)?;
        let mode = self.config.rotation;

        for (index, spec) in self.containers.iter().enumerate() {
            if spec.measure() < volume {
                log::debug!(
                    "Container '{}' skipped: volume {} < box volume {}",
                    spec.id(),
                    spec.measure(),
                    volume
                );
                continue;
            }

            if let Some(item) = instances
                .iter()
                .find(|item| !spec.can_hold(&item.dimension, mode))
            {
                log::debug!(
                    "Container '{}' skipped: box '{}' ({}) does not fit",
                    spec.id(),
                    boxes[item.geometry_idx].id(),
                    item.dimension
                );
                continue;
            }

            match self.pack_container(index, spec, boxes, &instances)? {
                Some(mut container) => {
                    container.computation_time_ms = start.elapsed().as_millis() as u64;
                    debug_assert!(
                        container.validate().is_ok(),
                        "invalid packing: {:?}",
                        container.validate()
                    );
                    log::debug!(
                        "Packed {} boxes into container '{}' in {} levels",
                        container.placed_count(),
                        spec.id(),
                        container.levels().len()
                    );
                    return Ok(Some(container));
                }
                None => {
                    log::debug!(
                        "Container '{}' abandoned: remaining boxes do not fit above the stack",
                        spec.id()
                    );
                }
            }
        }

        Ok(None)
    }

    /// Builds one container attempt from a fresh copy of the instances.
    ///
    /// Returns `Ok(None)` as soon as a pending box no longer fits above the
    /// levels built so far; the partial attempt is discarded.
    fn pack_container(
        &self,
        index: usize,
        spec: &ContainerSpec,
        geometries: &[BoxItem],
        instances: &[PackItem],
    ) -> Result<Option<Container>> {
        let mut pending = instances.to_vec();
        let mut container = Container::new(index, spec.clone());

        while !pending.is_empty() {
            let space = container.remaining_free_space();

            let mut seed: Option<usize> = None;
            for idx in 0..pending.len() {
                let Some(oriented) = self.rotate_for_level(&pending[idx].dimension, &space) else {
                    return Ok(None);
                };
                pending[idx].dimension = oriented;

                seed = match seed {
                    Some(current)
                        if !self.is_better_seed(&oriented, &pending[current].dimension) =>
                    {
                        Some(current)
                    }
                    _ => Some(idx),
                };
            }
            let mut seed =
                seed.ok_or_else(|| Error::Internal("no seed box for a new level".into()))?;

            // A box that closes the container exactly supersedes the seed.
            if pending[seed].dimension.height() < space.height() {
                let mut ideal: Option<usize> = None;
                for (idx, item) in pending.iter().enumerate() {
                    if item.dimension.height() == space.height()
                        && ideal.map_or(true, |i| {
                            pending[i].dimension.footprint() < item.dimension.footprint()
                        })
                    {
                        ideal = Some(idx);
                    }
                }
                if let Some(idx) = ideal {
                    seed = idx;
                }
            }

            let level_height = pending[seed].dimension.height();
            let level_space = Space::new(
                spec.width(),
                spec.depth(),
                level_height,
                0,
                0,
                container.stack_height(),
            );
            log::trace!(
                "Level {} opened at z={} with height {}",
                container.levels().len(),
                container.stack_height(),
                level_height
            );

            container.add_level(level_height);
            let item = pending.remove(seed);
            self.fit_2d(geometries, &mut pending, &mut container, item, level_space)?;
        }

        Ok(Some(container))
    }

    /// Orients a box for the level search, or `None` if it cannot fit.
    fn rotate_for_level(&self, item: &Dimension, space: &Dimension) -> Option<Dimension> {
        if self.config.rotate_3d() {
            item.rotate_largest_footprint_3d(space)
        } else {
            item.fit_rotate_2d(space)
        }
    }

    /// Returns true if `candidate` should replace `current` as level seed.
    fn is_better_seed(&self, candidate: &Dimension, current: &Dimension) -> bool {
        let footprint_first = self.config.footprint_first();
        let key = |d: &Dimension| {
            if footprint_first {
                (d.footprint(), d.height())
            } else {
                (d.height(), d.footprint())
            }
        };
        key(candidate) > key(current)
    }

    /// Places `item` in `space` and fills the rest of `space` from `pending`.
    ///
    /// The orientation of `item` is committed only after the leftover split
    /// that will actually be used is known.
    fn fit_2d(
        &self,
        geometries: &[BoxItem],
        pending: &mut Vec<PackItem>,
        container: &mut Container,
        mut item: PackItem,
        space: Space,
    ) -> Result<()> {
        let mode = self.config.rotation;

        if self.config.rotate_3d() {
            item.dimension = item
                .dimension
                .fit_rotate_3d_smallest_footprint(space.dimension())
                .ok_or_else(|| region_error(geometries, &item, &space))?;
        }

        if pending.is_empty() {
            return self.place_fitted(geometries, container, item, space);
        }

        let splits = free_spaces(&space, &item.dimension);
        let Some((next_idx, split)) = best_volume_placement(pending, &splits, mode) else {
            return self.place_fitted(geometries, container, item, space);
        };

        if split.rotated {
            item.dimension = item.dimension.rotate_2d();
        }
        place(geometries, container, item, space)?;

        let next = pending.remove(next_idx);

        // Fill the remainder between the placed box and the chosen leftover first.
        if !split.remainder.is_empty() {
            if let Some(idx) = best_volume(pending, &split.remainder, mode) {
                let filler = pending.remove(idx);
                self.fit_2d(geometries, pending, container, filler, split.remainder)?;
            }
        }

        self.fit_2d(geometries, pending, container, next, split.space)
    }

    /// Commits a planar rotation of `item` that fits `space` and places it.
    fn place_fitted(
        &self,
        geometries: &[BoxItem],
        container: &mut Container,
        mut item: PackItem,
        space: Space,
    ) -> Result<()> {
        item.dimension = item
            .dimension
            .fit_rotate_2d(space.dimension())
            .ok_or_else(|| region_error(geometries, &item, &space))?;
        place(geometries, container, item, space)
    }
}

fn place(
    geometries: &[BoxItem],
    container: &mut Container,
    item: PackItem,
    space: Space,
) -> Result<()> {
    if !item.dimension.fits_exactly(space.dimension()) {
        return Err(region_error(geometries, &item, &space));
    }
    let id = geometries[item.geometry_idx].id().clone();
    container.add(Placement::new(space, id, item.instance, item.dimension))
}

fn region_error(geometries: &[BoxItem], item: &PackItem, space: &Space) -> Error {
    Error::Internal(format!(
        "box '{}' #{} ({}) does not fit its assigned region ({})",
        geometries[item.geometry_idx].id(),
        item.instance,
        item.dimension,
        space.dimension()
    ))
}
