//! Shape value type
//!
//! A shape is an anchor (lower corner for rectangles, center for circles) plus
//! extents. Rectangles with a positive depth are cuboids; circles use their
//! width as diameter.

use serde::{Serialize, Deserialize};
use crate::foundation::math::{Vec2, Vec3};

/// Shape kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle, or cuboid when `depth > 0`
    #[default]
    Rectangle,
    /// Circle, diameter taken from `width`
    Circle,
}

/// An axis-aligned shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Anchor x coordinate
    pub x: f32,
    /// Anchor y coordinate
    pub y: f32,
    /// Anchor z coordinate (0 for flat shapes)
    #[serde(default)]
    pub z: f32,
    /// Extent along x (diameter for circles)
    pub width: f32,
    /// Extent along y
    pub height: f32,
    /// Extent along z; zero marks a purely 2D shape
    #[serde(default)]
    pub depth: f32,
    /// Which overlap test applies
    #[serde(default)]
    pub kind: ShapeKind,
}

impl Shape {
    /// Creates a flat rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::rectangle(x, y, width, height)
    }

    /// Creates a flat rectangle anchored at its lower corner
    pub const fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            width,
            height,
            depth: 0.0,
            kind: ShapeKind::Rectangle,
        }
    }

    /// Creates a circle; `width` and `height` are both expected to be the diameter
    pub const fn circle(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::rectangle(x, y, width, height).with_kind(ShapeKind::Circle)
    }

    /// Creates a rectangle extruded along z
    pub const fn cuboid(x: f32, y: f32, z: f32, width: f32, height: f32, depth: f32) -> Self {
        Self::rectangle(x, y, width, height).with_depth(z, depth)
    }

    /// Same shape with a different kind
    #[must_use]
    pub const fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Same shape placed at `z` with the given depth
    #[must_use]
    pub const fn with_depth(mut self, z: f32, depth: f32) -> Self {
        self.z = z;
        self.depth = depth;
        self
    }

    /// True when the shape has a positive depth
    pub fn is_volumetric(&self) -> bool {
        self.depth > 0.0
    }

    /// Circle radius (half the width, height is not consulted)
    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }

    /// Anchor position as a vector
    pub fn anchor(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Extents as a vector
    pub fn extent(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Anchor projected onto the xy plane
    pub fn center_xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_defaults_to_flat() {
        let shape = Shape::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(shape.kind, ShapeKind::Rectangle);
        assert_eq!(shape.z, 0.0);
        assert_eq!(shape.depth, 0.0);
        assert!(!shape.is_volumetric());
    }

    #[test]
    fn test_cuboid_is_volumetric() {
        let shape = Shape::cuboid(1.0, 1.0, 1.0, 4.0, 4.0, 3.0);
        assert!(shape.is_volumetric());
        assert_eq!(shape.kind, ShapeKind::Rectangle);
        assert_eq!(shape.anchor(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(shape.extent(), Vec3::new(4.0, 4.0, 3.0));
    }

    #[test]
    fn test_circle_radius_uses_width_only() {
        let shape = Shape::circle(0.0, 0.0, 4.0, 10.0);
        assert_eq!(shape.kind, ShapeKind::Circle);
        assert_relative_eq!(shape.radius(), 2.0);
    }

    #[test]
    fn test_structural_equality() {
        let a = Shape::circle(2.0, 2.0, 2.0, 2.0);
        let b = Shape::rectangle(2.0, 2.0, 2.0, 2.0).with_kind(ShapeKind::Circle);
        assert_eq!(a, b);
        assert_ne!(a, Shape::rectangle(2.0, 2.0, 2.0, 2.0));
    }
}
