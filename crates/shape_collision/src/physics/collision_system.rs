//! All-pairs collision scanner
//!
//! Tests every unordered pair of shapes in a list with [`overlaps`] and reports
//! the colliding ones by their position in the list. There is no broad phase:
//! a list of N shapes always costs N * (N - 1) / 2 tests.

use std::fmt;

use crate::physics::collision::{overlaps, Shape};

/// Two colliding shapes, identified by their index in the scanned list
///
/// Only built through [`CollisionPair::new`], so `index_a <= index_b` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    index_a: usize,
    index_b: usize,
}

impl CollisionPair {
    /// Create a new collision pair (always stores the smaller index first)
    pub fn new(index_a: usize, index_b: usize) -> Self {
        if index_a <= index_b {
            Self { index_a, index_b }
        } else {
            Self { index_a: index_b, index_b: index_a }
        }
    }

    /// Lower index
    pub const fn index_a(&self) -> usize {
        self.index_a
    }

    /// Higher index
    pub const fn index_b(&self) -> usize {
        self.index_b
    }
}

impl fmt::Display for CollisionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape {} collides with Shape {}", self.index_a, self.index_b)
    }
}

/// Every colliding pair in `shapes`, ordered by ascending `(index_a, index_b)`
pub fn find_colliding_pairs(shapes: &[Shape]) -> Vec<CollisionPair> {
    let mut pairs = Vec::new();

    for (i, shape_a) in shapes.iter().enumerate() {
        for (j, shape_b) in shapes.iter().enumerate().skip(i + 1) {
            let hit = overlaps(shape_a, shape_b);
            log::trace!("Tested shape {} against shape {}: {}", i, j, hit);

            if hit {
                log::debug!("Shape {} collides with shape {}", i, j);
                pairs.push(CollisionPair::new(i, j));
            }
        }
    }

    pairs
}

/// Human-readable report line for every colliding pair in `shapes`
pub fn scan_all_pairs(shapes: &[Shape]) -> Vec<String> {
    find_colliding_pairs(shapes)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Result of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of pairs handed to the overlap test
    pub pairs_tested: usize,
    /// Colliding pairs in ascending index order
    pub collisions: Vec<CollisionPair>,
}

impl ScanSummary {
    /// Report lines for the colliding pairs
    pub fn reports(&self) -> Vec<String> {
        self.collisions.iter().map(ToString::to_string).collect()
    }

    /// True when nothing collided
    pub fn is_clear(&self) -> bool {
        self.collisions.is_empty()
    }
}

/// Owns a list of shapes and scans it on demand
#[derive(Debug, Clone, Default)]
pub struct ShapeCollisionScanner {
    shapes: Vec<Shape>,

    /// Log a summary after each scan
    pub debug_enabled: bool,
}

impl ShapeCollisionScanner {
    /// Create an empty scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner over an existing shape list
    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes, debug_enabled: false }
    }

    /// Append a shape and return its index
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Shapes in scan order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the shape at `index`
    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Number of shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Remove all shapes
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Test every unordered pair once
    pub fn detect_collisions(&self) -> ScanSummary {
        let n = self.shapes.len();
        let summary = ScanSummary {
            pairs_tested: n * n.saturating_sub(1) / 2,
            collisions: find_colliding_pairs(&self.shapes),
        };

        if self.debug_enabled {
            log::info!(
                "Scanned {} shapes ({} pairs): {} collisions",
                n,
                summary.pairs_tested,
                summary.collisions.len()
            );
        }

        summary
    }
}
