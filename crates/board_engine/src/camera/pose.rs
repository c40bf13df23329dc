//! Camera poses and focus interpolation
//!
//! A focus move never animates through the keyframe player. Each frame the
//! eye and the target independently cover a fixed fraction of their
//! remaining distance; once every axis of both is within the settle epsilon
//! the pose snaps onto the goal.

use crate::config::CameraConfig;
use crate::foundation::math::{utils, Vec3};

/// Eye position plus look-at target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position
    pub eye: Vec3,
    /// Look-at point
    pub target: Vec3,
}

impl CameraPose {
    /// Pose from an eye and a target
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// Overview framing around `anchor`
    ///
    /// The target sits on the ground plane below the anchor; the eye is
    /// `height` above it and set back along +z so it looks down at `angle`.
    pub fn overview(anchor: &Vec3, config: &CameraConfig) -> Self {
        let target = Vec3::new(anchor.x, 0.0, anchor.z);
        let eye = Vec3::new(
            target.x,
            config.height,
            target.z + config.height / config.angle.tan(),
        );
        Self { eye, target }
    }

    /// Close-up framing of an object at `object`, approached from `current_eye`
    ///
    /// The eye keeps the horizontal bearing it currently has towards the
    /// object. The direction carries a constant vertical component of 1 so it
    /// can never be zero, even when the eye is directly above the object.
    pub fn focus(object: &Vec3, current_eye: &Vec3, config: &CameraConfig) -> Self {
        let bearing = Vec3::new(object.x - current_eye.x, 1.0, object.z - current_eye.z);
        let offset = utils::try_normalize(&bearing).unwrap_or_else(Vec3::y) * config.focus_radius;
        let eye = Vec3::new(object.x - offset.x, config.focus_height, object.z - offset.z);
        Self { eye, target: *object }
    }

    /// Largest per-axis distance to `goal` over both eye and target
    pub fn max_axis_delta(&self, goal: &CameraPose) -> f32 {
        (self.eye - goal.eye)
            .iter()
            .chain((self.target - goal.target).iter())
            .fold(0.0, |max, delta| max.max(delta.abs()))
    }

    /// Whether every axis of eye and target is within `epsilon` of `goal`
    pub fn is_settled(&self, goal: &CameraPose, epsilon: f32) -> bool {
        utils::within_epsilon(&self.eye, &goal.eye, epsilon)
            && utils::within_epsilon(&self.target, &goal.target, epsilon)
    }

    /// Move eye and target `factor` of the way towards `goal`
    pub fn step_toward(&mut self, goal: &CameraPose, factor: f32) {
        self.eye = utils::lerp_vec3(&self.eye, &goal.eye, factor);
        self.target = utils::lerp_vec3(&self.target, &goal.target, factor);
    }

    /// One interpolation frame: lerp while unsettled, otherwise snap
    ///
    /// Returns `true` on the frame that snaps onto `goal`.
    pub fn settle_step(&mut self, goal: &CameraPose, factor: f32, epsilon: f32) -> bool {
        if self.is_settled(goal, epsilon) {
            *self = *goal;
            true
        } else {
            self.step_toward(goal, factor);
            false
        }
    }
}

/// Number of lerp frames before a move whose largest axis delta is
/// `distance` comes within `epsilon`: `ceil(ln(epsilon / distance) / ln(1 - factor))`
///
/// The snap happens on the frame after these. Already-settled moves need none.
pub fn frames_to_settle(distance: f32, factor: f32, epsilon: f32) -> u32 {
    if distance < epsilon {
        return 0;
    }
    let frames = ((epsilon / distance).ln() / (1.0 - factor).ln()).ceil();
    frames.max(0.0) as u32
}
