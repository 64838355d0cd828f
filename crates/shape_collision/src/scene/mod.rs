//! Scene data: shape lists that can be loaded from disk

pub mod shape_set;

pub use shape_set::ShapeSet;
