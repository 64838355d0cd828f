//! Physics module for collision detection
//!
//! Narrow overlap tests between axis-aligned shapes and an all-pairs scanner
//! built on top of them.

pub mod collision;
pub mod collision_system;

pub use collision::{
    overlaps,
    Shape,
    ShapeKind,
};
pub use collision_system::{
    find_colliding_pairs,
    scan_all_pairs,
    CollisionPair,
    ScanSummary,
    ShapeCollisionScanner,
};
