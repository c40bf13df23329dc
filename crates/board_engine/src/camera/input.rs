//! Keyboard camera input
//!
//! Replaces the host camera's default keyboard handling. Direction keys are
//! tracked while attached and applied once per frame according to the
//! active [`InputBehavior`].

use crate::config::CameraConfig;
use crate::foundation::math::Vec3;
use crate::input::{Direction, KeyCode};

use super::Camera;

/// What the direction keys do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputBehavior {
    /// Slide eye and target together over the board
    #[default]
    Pan,
    /// Orbit around the target
    Rotate,
}

/// Direction-key state and the behaviour it drives
#[derive(Debug, Clone)]
pub struct KeyboardCameraInput {
    behavior: InputBehavior,
    attached: bool,
    keys: Vec<KeyCode>,
    pan_speed: f32,
    rotate_step: f32,
}

impl KeyboardCameraInput {
    /// Detached input in pan mode
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            behavior: InputBehavior::Pan,
            attached: false,
            keys: Vec::new(),
            pan_speed: config.keyboard_speed,
            rotate_step: config.rotate_step,
        }
    }

    /// Start listening for key events
    pub fn attach(&mut self) {
        self.attached = true;
        log::debug!("Keyboard camera input attached");
    }

    /// Stop listening; held keys are forgotten
    pub fn detach(&mut self) {
        self.attached = false;
        self.keys.clear();
        log::debug!("Keyboard camera input detached");
    }

    /// Whether key events are currently accepted
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Active behaviour
    pub fn behavior(&self) -> InputBehavior {
        self.behavior
    }

    /// Switch behaviour
    pub fn set_behavior(&mut self, behavior: InputBehavior) {
        if self.behavior != behavior {
            log::debug!("Keyboard camera behaviour {:?} -> {:?}", self.behavior, behavior);
            self.behavior = behavior;
        }
    }

    /// Direction keys currently held, in press order
    pub fn held_keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Record a key press; returns `true` when the key was consumed
    pub fn key_down(&mut self, key: KeyCode) -> bool {
        if !self.attached || key.direction().is_none() {
            return false;
        }
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
        true
    }

    /// Record a key release; returns `true` when the key was consumed
    pub fn key_up(&mut self, key: KeyCode) -> bool {
        if !self.attached || key.direction().is_none() {
            return false;
        }
        self.keys.retain(|held| *held != key);
        true
    }

    /// Apply held keys to `camera` for a frame of `delta_time` seconds
    ///
    /// Nothing is applied while `suppressed` is set; held keys stay recorded
    /// and take effect again on the first frame after.
    pub fn check_inputs(&self, camera: &mut Camera, delta_time: f32, suppressed: bool) {
        if suppressed || !self.attached {
            return;
        }

        for direction in self.keys.iter().filter_map(|key| key.direction()) {
            match self.behavior {
                InputBehavior::Pan => {
                    let step = self.pan_speed * delta_time;
                    let delta = match direction {
                        Direction::Left => Vec3::new(step, 0.0, 0.0),
                        Direction::Right => Vec3::new(-step, 0.0, 0.0),
                        Direction::Up => Vec3::new(0.0, 0.0, -step),
                        Direction::Down => Vec3::new(0.0, 0.0, step),
                    };
                    camera.translate(&delta);
                }
                InputBehavior::Rotate => match direction {
                    Direction::Left => camera.inertial_alpha_offset -= self.rotate_step,
                    Direction::Right => camera.inertial_alpha_offset += self.rotate_step,
                    Direction::Up => camera.inertial_beta_offset -= self.rotate_step,
                    Direction::Down => camera.inertial_beta_offset += self.rotate_step,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;
    use approx::assert_relative_eq;

    fn setup() -> (Camera, KeyboardCameraInput) {
        let config = CameraConfig::default();
        let pose = CameraPose::new(Vec3::new(17.5, 50.0, 67.5), Vec3::new(17.5, 0.0, 17.5));
        let mut input = KeyboardCameraInput::new(&config);
        input.attach();
        (Camera::new(pose, &config), input)
    }

    #[test]
    fn test_pan_directions() {
        let (mut camera, mut input) = setup();
        input.key_down(KeyCode::Left);
        input.check_inputs(&mut camera, 0.1, false);
        assert_relative_eq!(camera.target, Vec3::new(18.5, 0.0, 17.5), epsilon = 1e-5);
        assert_relative_eq!(camera.position, Vec3::new(18.5, 50.0, 67.5), epsilon = 1e-5);

        input.key_up(KeyCode::Left);
        input.key_down(KeyCode::W);
        input.check_inputs(&mut camera, 0.1, false);
        assert_relative_eq!(camera.target, Vec3::new(18.5, 0.0, 16.5), epsilon = 1e-5);
    }

    #[test]
    fn test_each_held_key_contributes() {
        let (mut camera, mut input) = setup();
        input.key_down(KeyCode::Left);
        input.key_down(KeyCode::A);
        input.key_down(KeyCode::A);
        assert_eq!(input.held_keys().len(), 2);

        input.check_inputs(&mut camera, 0.1, false);
        assert_relative_eq!(camera.target.x, 19.5, epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_mode_feeds_orbit_offsets() {
        let (mut camera, mut input) = setup();
        input.set_behavior(InputBehavior::Rotate);
        input.key_down(KeyCode::Right);
        input.key_down(KeyCode::Up);
        let before = camera.pose();

        input.check_inputs(&mut camera, 0.016, false);
        assert_relative_eq!(camera.inertial_alpha_offset, 0.003);
        assert_relative_eq!(camera.inertial_beta_offset, -0.003);
        assert_eq!(camera.pose(), before);
    }

    #[test]
    fn test_suppressed_frames_apply_nothing() {
        let (mut camera, mut input) = setup();
        input.key_down(KeyCode::Down);
        let before = camera.pose();
        input.check_inputs(&mut camera, 0.1, true);
        assert_eq!(camera.pose(), before);
    }

    #[test]
    fn test_detach_clears_and_ignores_keys() {
        let (mut camera, mut input) = setup();
        input.key_down(KeyCode::Left);
        input.detach();
        assert!(input.held_keys().is_empty());
        assert!(!input.key_down(KeyCode::Left));

        let before = camera.pose();
        input.check_inputs(&mut camera, 0.1, false);
        assert_eq!(camera.pose(), before);
    }

    #[test]
    fn test_non_direction_keys_are_not_consumed() {
        let (_, mut input) = setup();
        assert!(!input.key_down(KeyCode::Escape));
        assert!(!input.key_up(KeyCode::Space));
        assert!(input.held_keys().is_empty());
    }
}
