//! Pack result summary.

use crate::geometry::GeometryId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary statistics for a successful pack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Id of the chosen container.
    pub container_id: GeometryId,
    /// Index of the chosen container in the candidate list.
    pub container_index: usize,
    /// Number of box instances placed.
    pub placed: usize,
    /// Number of levels built.
    pub levels: usize,
    /// Total height of all levels.
    pub stack_height: u64,
    /// Total box volume over container volume (0.0 - 1.0).
    pub utilization: f64,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl PackSummary {
    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_percent() {
        let summary = PackSummary {
            container_id: "C1".to_string(),
            container_index: 0,
            placed: 2,
            levels: 1,
            stack_height: 10,
            utilization: 0.85,
            computation_time_ms: 0,
        };
        assert_eq!(summary.utilization_percent(), "85.0%");
    }
}
