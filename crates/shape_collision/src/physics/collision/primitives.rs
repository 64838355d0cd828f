//! Per-kind overlap tests
//!
//! Each test assumes both shapes are of the kind it is written for; kind
//! dispatch lives in [`super::overlaps`].

use crate::foundation::math::intervals_overlap;
use super::shape::Shape;

/// Separating-axis test on the x and y footprints.
///
/// Depth is ignored. Rectangles whose edges only touch do not overlap.
pub fn rectangles_overlap_2d(a: &Shape, b: &Shape) -> bool {
    intervals_overlap(a.x, a.width, b.x, b.width)
        && intervals_overlap(a.y, a.height, b.y, b.height)
}

/// Circle test: center distance strictly below the sum of radii.
///
/// Tangent circles do not overlap.
pub fn circles_overlap(a: &Shape, b: &Shape) -> bool {
    let distance = (a.center_xy() - b.center_xy()).magnitude();
    distance < (a.width + b.width) / 2.0
}

/// Overlap along the z axis only, x and y are not consulted.
pub fn depth_ranges_overlap(a: &Shape, b: &Shape) -> bool {
    intervals_overlap(a.z, a.depth, b.z, b.depth)
}
