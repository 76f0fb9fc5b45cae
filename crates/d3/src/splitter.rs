//! Free-space splitting after a box is placed in a region.
//!
//! The box sits in the min corner of the region. The leftover L-shape can be
//! cut two ways, and the box can lie in either of its two planar rotations,
//! giving up to four candidate splits. Every split keeps the region's height.
//!
//! ```text
//!  side split                  top split
//!  ..........................  ..........................
//!  .          .             .  .                        .
//!  . remainder.             .  .         space          .
//!  .          .   space     .  .                        .
//!  ............             .  ............................
//!  .   box    .             .  .   box    . remainder   .
//!  ..........................  ..........................
//! ```

use crate::space::{Space, Split};
use u_packing_core::geometry::Dimension;

/// Computes the candidate splits of `region` around `used`.
///
/// The result is ordered side, top, rotated side, rotated top. Entries are
/// `None` when the footprint in that rotation does not fit, or when the
/// working leftover would have zero width or depth.
pub fn free_spaces(region: &Space, used: &Dimension) -> [Option<Split>; 4] {
    let [side, top] = splits_for(region, used.width(), used.depth(), false);
    let [rotated_side, rotated_top] = splits_for(region, used.depth(), used.width(), true);
    [side, top, rotated_side, rotated_top]
}

fn splits_for(region: &Space, width: u64, depth: u64, rotated: bool) -> [Option<Split>; 2] {
    if region.width() < width || region.depth() < depth {
        return [None, None];
    }

    let (x, y, z) = (region.x(), region.y(), region.z());
    let height = region.height();

    // Right of the box at full depth; the remainder is behind the box.
    let side = (region.width() > width).then(|| Split {
        space: Space::new(region.width() - width, region.depth(), height, x + width, y, z),
        remainder: Space::new(width, region.depth() - depth, height, x, y + depth, z),
        rotated,
    });

    // Behind the box at full width; the remainder is right of the box.
    let top = (region.depth() > depth).then(|| Split {
        space: Space::new(region.width(), region.depth() - depth, height, x, y + depth, z),
        remainder: Space::new(region.width() - width, depth, height, x + width, y, z),
        rotated,
    });

    [side, top]
}
