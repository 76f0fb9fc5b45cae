//! Best-fit selection of pending boxes for free spaces.
//!
//! Both selectors prefer the largest volume that fits. Equal volumes are
//! broken by the smaller footprint after the rotation that minimises it
//! within the candidate space; a full tie keeps the earlier candidate.

use crate::geometry::PackItem;
use crate::space::{Space, Split};
use u_packing_core::RotationMode;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    volume: u64,
    footprint: u64,
}

impl Candidate {
    /// Scores `item` against `space`, or `None` if it does not fit.
    fn score(item: &PackItem, space: &Space, mode: RotationMode) -> Option<Self> {
        let oriented = item
            .dimension
            .fit_rotate_smallest_footprint(space.dimension(), mode)?;
        Some(Self {
            volume: oriented.volume(),
            footprint: oriented.footprint(),
        })
    }

    fn beats(&self, best: &Candidate) -> bool {
        self.volume > best.volume || (self.volume == best.volume && self.footprint < best.footprint)
    }
}

/// Picks the pending item that best fills `space`.
///
/// Returns the index into `pending`.
pub fn best_volume(pending: &[PackItem], space: &Space, mode: RotationMode) -> Option<usize> {
    let mut best: Option<(usize, Candidate)> = None;
    for (idx, item) in pending.iter().enumerate() {
        let Some(candidate) = Candidate::score(item, space, mode) else {
            continue;
        };
        if best.map_or(true, |(_, b)| candidate.beats(&b)) {
            best = Some((idx, candidate));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Picks the best (item, split) pair over all candidate splits.
///
/// Splits are scanned in order, and items within each split. Returns the
/// index into `pending` and the chosen split.
pub fn best_volume_placement(
    pending: &[PackItem],
    splits: &[Option<Split>],
    mode: RotationMode,
) -> Option<(usize, Split)> {
    let mut best: Option<(usize, Split, Candidate)> = None;
    for split in splits.iter().flatten() {
        for (idx, item) in pending.iter().enumerate() {
            let Some(candidate) = Candidate::score(item, &split.space, mode) else {
                continue;
            };
            if best.map_or(true, |(_, _, b)| candidate.beats(&b)) {
                best = Some((idx, *split, candidate));
            }
        }
    }
    best.map(|(idx, split, _)| (idx, split))
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_packing_core::Dimension;

    fn item(idx: usize, width: u64, depth: u64, height: u64) -> PackItem {
        PackItem {
            geometry_idx: idx,
            instance: 0,
            dimension: Dimension::new(width, depth, height),
        }
    }

    #[test]
    fn test_largest_volume_wins() {
        let pending = vec![item(0, 2, 2, 2), item(1, 3, 3, 3), item(2, 20, 1, 1)];
        let space = Space::new(5, 5, 5, 0, 0, 0);
        assert_eq!(best_volume(&pending, &space, RotationMode::ThreeD), Some(1));
    }

    #[test]
    fn test_nothing_fits() {
        let pending = vec![item(0, 6, 6, 6)];
        let space = Space::new(5, 5, 5, 0, 0, 0);
        assert_eq!(best_volume(&pending, &space, RotationMode::ThreeD), None);
    }

    #[test]
    fn test_equal_volume_prefers_smaller_footprint_3d() {
        // Both have volume 8; the 1x1x8 stands upright in a tall space.
        let pending = vec![item(0, 2, 2, 2), item(1, 8, 1, 1)];
        let space = Space::new(10, 10, 10, 0, 0, 0);
        assert_eq!(best_volume(&pending, &space, RotationMode::ThreeD), Some(1));

        // In a flat space it must lie down, so the cube keeps the lead.
        let flat = Space::new(10, 10, 2, 0, 0, 0);
        assert_eq!(best_volume(&pending, &flat, RotationMode::ThreeD), Some(0));
    }

    #[test]
    fn test_equal_volume_prefers_smaller_footprint_2d() {
        let pending = vec![item(0, 4, 2, 1), item(1, 2, 2, 2)];
        let space = Space::new(10, 10, 10, 0, 0, 0);
        assert_eq!(best_volume(&pending, &space, RotationMode::TwoD), Some(1));
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let pending = vec![item(0, 2, 3, 4), item(1, 3, 2, 4)];
        let space = Space::new(10, 10, 10, 0, 0, 0);
        assert_eq!(best_volume(&pending, &space, RotationMode::TwoD), Some(0));
    }

    #[test]
    fn test_2d_mode_respects_height() {
        let pending = vec![item(0, 1, 1, 6)];
        let space = Space::new(10, 10, 5, 0, 0, 0);
        assert_eq!(best_volume(&pending, &space, RotationMode::TwoD), None);
        assert_eq!(best_volume(&pending, &space, RotationMode::ThreeD), Some(0));
    }

    #[test]
    fn test_placement_scans_all_splits() {
        let small = Split {
            space: Space::new(2, 2, 2, 0, 0, 0),
            remainder: Space::new(0, 0, 0, 0, 0, 0),
            rotated: false,
        };
        let large = Split {
            space: Space::new(4, 4, 4, 2, 0, 0),
            remainder: Space::new(0, 0, 0, 0, 0, 0),
            rotated: true,
        };
        let pending = vec![item(0, 2, 2, 2), item(1, 4, 4, 4)];
        let splits = [Some(small), None, Some(large), None];

        let (idx, split) = best_volume_placement(&pending, &splits, RotationMode::ThreeD).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(split, large);
    }

    #[test]
    fn test_placement_tie_keeps_first_split() {
        let a = Split {
            space: Space::new(5, 5, 5, 0, 0, 0),
            remainder: Space::new(0, 0, 0, 0, 0, 0),
            rotated: false,
        };
        let b = Split { rotated: true, ..a };
        let pending = vec![item(0, 2, 2, 2)];

        let (_, split) =
            best_volume_placement(&pending, &[Some(a), Some(b)], RotationMode::TwoD).unwrap();
        assert!(!split.rotated);
    }

    #[test]
    fn test_placement_none_when_nothing_fits() {
        let pending = vec![item(0, 9, 9, 9)];
        let splits = [
            Some(Split {
                space: Space::new(5, 5, 5, 0, 0, 0),
                remainder: Space::new(0, 0, 0, 0, 0, 0),
                rotated: false,
            }),
            None,
            None,
            None,
        ];
        assert!(best_volume_placement(&pending, &splits, RotationMode::ThreeD).is_none());
        assert!(best_volume_placement(&pending, &[], RotationMode::ThreeD).is_none());
    }
}
