//! Collision detection between axis-aligned shapes
//!
//! # Module Organization
//!
//! - [`shape`] - The [`Shape`] value and its [`ShapeKind`] tag
//! - [`primitives`] - Per-kind overlap tests
//!
//! # Dispatch
//!
//! [`overlaps`] only pairs shapes of the same kind. Rectangles are always
//! compared on their xy footprint, even when both carry a depth; callers that
//! need the z extent can combine [`primitives::depth_ranges_overlap`] with the
//! footprint test themselves. Mixed kinds never collide.

pub mod primitives;
pub mod shape;

pub use primitives::{rectangles_overlap_2d, circles_overlap, depth_ranges_overlap};
pub use shape::{Shape, ShapeKind};

/// Test whether two shapes collide
pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    match (a.kind, b.kind) {
        // Footprint only; cuboids are not tested along z here.
        (ShapeKind::Rectangle, ShapeKind::Rectangle) => rectangles_overlap_2d(a, b),
        (ShapeKind::Circle, ShapeKind::Circle) => circles_overlap(a, b),
        _ => false,
    }
}
