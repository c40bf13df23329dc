//! # Orbit Camera
//!
//! Camera state for the board scene: an eye orbiting a target point, plus
//! the accumulators the keyboard rotate mode feeds.
//!
//! ## Coordinate System
//! Y-up. The orbit is expressed in spherical coordinates around the target:
//! `eye = target + r * (cos(alpha) sin(beta), cos(beta), sin(alpha) sin(beta))`,
//! so `beta = 0` looks straight down and `beta = pi/2` is level with the board.
//!
//! ## Submodules
//! - [`pose`]: eye/target pairs and the exponential focus interpolation
//! - [`input`]: keyboard remapping with pan and rotate behaviours
//! - [`drag`]: pointer drag panning in overview mode

pub mod pose;
pub mod input;
pub mod drag;

pub use pose::CameraPose;
pub use input::{InputBehavior, KeyboardCameraInput};
pub use drag::PointerDrag;

use crate::config::CameraConfig;
use crate::foundation::math::Vec3;

/// Offsets smaller than this are snapped to zero when inertia decays them
const OFFSET_EPSILON: f32 = 0.001;

/// Lowest vertical orbit angle; keeps the eye off the pole
const LOWER_BETA_LIMIT: f32 = 0.01;

/// Orbit camera around a target point
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space
    pub position: Vec3,

    /// Point the camera looks at
    pub target: Vec3,

    /// Pending horizontal orbit rotation in radians
    pub inertial_alpha_offset: f32,

    /// Pending vertical orbit rotation in radians
    pub inertial_beta_offset: f32,

    lower_radius: f32,
    upper_radius: f32,
    upper_beta_limit: f32,
    inertia: f32,
    wheel_precision: f32,
}

impl Camera {
    /// Create a camera at `pose` with limits taken from `config`
    pub fn new(pose: CameraPose, config: &CameraConfig) -> Self {
        Self {
            position: pose.eye,
            target: pose.target,
            inertial_alpha_offset: 0.0,
            inertial_beta_offset: 0.0,
            lower_radius: config.min_radius,
            upper_radius: config.max_height,
            upper_beta_limit: config.upper_beta_limit,
            inertia: config.inertia,
            wheel_precision: config.wheel_precision,
        }
    }

    /// Current eye/target pair
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.target)
    }

    /// Move eye and target to `pose`
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.eye;
        self.target = pose.target;
        log::trace!("Camera pose set to eye {:?}, target {:?}", pose.eye, pose.target);
    }

    /// Shift eye and target together
    pub fn translate(&mut self, delta: &Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Distance between eye and target
    pub fn radius(&self) -> f32 {
        (self.position - self.target).norm()
    }

    /// Horizontal orbit angle
    pub fn alpha(&self) -> f32 {
        let offset = self.position - self.target;
        offset.z.atan2(offset.x)
    }

    /// Vertical orbit angle measured from straight up
    pub fn beta(&self) -> f32 {
        let radius = self.radius();
        if radius <= f32::EPSILON {
            return 0.0;
        }
        (((self.position.y - self.target.y) / radius).clamp(-1.0, 1.0)).acos()
    }

    /// Change the orbit radius by a wheel delta; positive zooms out
    pub fn zoom(&mut self, wheel_delta: f32) {
        let radius = self.radius() + wheel_delta / self.wheel_precision;
        self.place_on_orbit(self.alpha(), self.beta(), radius);
    }

    /// Apply pending orbit offsets and let them decay by the inertia factor
    ///
    /// Does nothing while both offsets are zero, so pans and focus moves that
    /// write the pose directly are left untouched.
    pub fn update_orbit(&mut self) {
        if self.inertial_alpha_offset == 0.0 && self.inertial_beta_offset == 0.0 {
            return;
        }

        let alpha = self.alpha() + self.inertial_alpha_offset;
        let beta = self.beta() + self.inertial_beta_offset;
        self.place_on_orbit(alpha, beta, self.radius());

        self.inertial_alpha_offset = decay(self.inertial_alpha_offset, self.inertia);
        self.inertial_beta_offset = decay(self.inertial_beta_offset, self.inertia);
    }

    fn place_on_orbit(&mut self, alpha: f32, beta: f32, radius: f32) {
        let beta = beta.clamp(LOWER_BETA_LIMIT, self.upper_beta_limit);
        let radius = radius.clamp(self.lower_radius, self.upper_radius);
        let offset = Vec3::new(
            radius * alpha.cos() * beta.sin(),
            radius * beta.cos(),
            radius * alpha.sin() * beta.sin(),
        );
        self.position = self.target + offset;
        log::trace!("Camera orbit: alpha {:.3}, beta {:.3}, radius {:.2}", alpha, beta, radius);
    }
}

fn decay(offset: f32, inertia: f32) -> f32 {
    let next = offset * inertia;
    if next.abs() < OFFSET_EPSILON {
        0.0
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::QUARTER_PI;
    use approx::assert_relative_eq;

    fn overview_camera() -> Camera {
        let pose = CameraPose::new(Vec3::new(17.5, 50.0, 67.5), Vec3::new(17.5, 0.0, 17.5));
        Camera::new(pose, &CameraConfig::default())
    }

    #[test]
    fn test_overview_angles() {
        let camera = overview_camera();
        assert_relative_eq!(camera.beta(), QUARTER_PI, epsilon = 1e-5);
        assert_relative_eq!(camera.alpha(), std::f32::consts::FRAC_PI_2, epsilon = 1e-5);
        assert_relative_eq!(camera.radius(), 50.0 * 2f32.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn test_translate_moves_both_points() {
        let mut camera = overview_camera();
        camera.translate(&Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(camera.position, Vec3::new(18.5, 50.0, 65.5));
        assert_eq!(camera.target, Vec3::new(18.5, 0.0, 15.5));
    }

    #[test]
    fn test_orbit_offsets_rotate_and_decay() {
        let mut camera = overview_camera();
        let radius = camera.radius();
        camera.inertial_alpha_offset = 0.01;
        camera.update_orbit();

        assert_relative_eq!(camera.alpha(), std::f32::consts::FRAC_PI_2 + 0.01, epsilon = 1e-4);
        assert_relative_eq!(camera.radius(), radius, epsilon = 1e-3);
        assert_relative_eq!(camera.inertial_alpha_offset, 0.009, epsilon = 1e-6);

        for _ in 0..100 {
            camera.update_orbit();
        }
        assert_eq!(camera.inertial_alpha_offset, 0.0);
    }

    #[test]
    fn test_beta_is_clamped_to_upper_limit() {
        let mut camera = overview_camera();
        camera.inertial_beta_offset = 2.0;
        camera.update_orbit();
        assert_relative_eq!(camera.beta(), std::f32::consts::FRAC_PI_2, epsilon = 1e-4);
        assert!(camera.position.y >= camera.target.y - 1e-3);
    }

    #[test]
    fn test_zoom_respects_radius_limits() {
        let mut camera = overview_camera();
        camera.zoom(10_000.0);
        assert_relative_eq!(camera.radius(), 200.0, epsilon = 1e-3);
        camera.zoom(-10_000.0);
        assert_relative_eq!(camera.radius(), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_idle_orbit_leaves_pose_alone() {
        let mut camera = overview_camera();
        let before = camera.pose();
        camera.update_orbit();
        assert_eq!(camera.pose(), before);
    }
}
