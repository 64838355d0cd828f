//! # Shape Collision
//!
//! Overlap tests for axis-aligned shapes and an all-pairs collision scanner.
//!
//! ## Features
//!
//! - **Rectangles**: 2D separating-axis test, touching edges do not collide
//! - **Circles**: center-distance test using the width as diameter
//! - **Cuboids**: rectangles carrying a `z`/`depth` extent
//! - **Shape sets**: load and save shape lists as TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_collision::prelude::*;
//!
//! let shapes = vec![
//!     Shape::rectangle(0.0, 0.0, 5.0, 5.0),
//!     Shape::rectangle(4.0, 4.0, 5.0, 5.0),
//!     Shape::circle(20.0, 20.0, 2.0, 2.0),
//! ];
//!
//! assert!(overlaps(&shapes[0], &shapes[1]));
//! assert_eq!(scan_all_pairs(&shapes), vec!["Shape 0 collides with Shape 1".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod scene;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Vec2, Vec3},
        physics::{
            overlaps, scan_all_pairs, find_colliding_pairs,
            CollisionPair, Shape, ShapeKind, ShapeCollisionScanner, ScanSummary,
        },
        scene::ShapeSet,
    };
}
