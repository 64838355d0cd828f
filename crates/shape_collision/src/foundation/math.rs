//! Math utilities and types
//!
//! Vector aliases used for shape anchors, extents and circle centers.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Returns true when the half-open intervals `[min_a, min_a + len_a)` and
/// `[min_b, min_b + len_b)` share any interior.
///
/// Intervals that only meet at an endpoint are separated.
pub fn intervals_overlap(min_a: f32, len_a: f32, min_b: f32, len_b: f32) -> bool {
    !(min_a + len_a <= min_b || min_b + len_b <= min_a)
}
