//! Packer configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which box rotations the packer may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationMode {
    /// Any axis-aligned orientation (6 rotations).
    #[default]
    ThreeD,
    /// Upright only: width and depth may swap, height stays vertical.
    TwoD,
}

/// Ordering used to choose the box that seeds each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LevelOrder {
    /// Largest footprint wins, tallest breaks ties.
    #[default]
    FootprintFirst,
    /// Tallest wins, largest footprint breaks ties.
    HeightFirst,
}

/// Configuration for the packer.
///
/// Fixed at construction; a packer never mutates its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackConfig {
    /// Allowed box rotations.
    pub rotation: RotationMode,

    /// Level seed ordering.
    pub level_order: LevelOrder,
}

impl PackConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation mode.
    pub fn with_rotation(mut self, rotation: RotationMode) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the level seed ordering.
    pub fn with_level_order(mut self, level_order: LevelOrder) -> Self {
        self.level_order = level_order;
        self
    }

    /// Returns true if full 3D rotation is allowed.
    pub fn rotate_3d(&self) -> bool {
        self.rotation == RotationMode::ThreeD
    }

    /// Returns true if level seeds are ordered by footprint first.
    pub fn footprint_first(&self) -> bool {
        self.level_order == LevelOrder::FootprintFirst
    }
}
