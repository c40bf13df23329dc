//! Math utilities and types
//!
//! Provides the vector types and scalar helpers used by the camera, the
//! trajectory sampler and the keyframe player.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Component-wise linear interpolation between two vectors
    pub fn lerp_vec3(a: &Vec3, b: &Vec3, t: f32) -> Vec3 {
        a + (b - a) * t
    }

    /// Normalize `v`, returning `None` when its length is too small to
    /// produce a meaningful direction.
    pub fn try_normalize(v: &Vec3) -> Option<Vec3> {
        v.try_normalize(f32::EPSILON)
    }

    /// True when every component of `a - b` is strictly below `epsilon`.
    pub fn within_epsilon(a: &Vec3, b: &Vec3, epsilon: f32) -> bool {
        (a - b).iter().all(|delta| delta.abs() < epsilon)
    }
}
