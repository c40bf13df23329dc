//! Pointer drag panning

use crate::foundation::math::Vec3;

use super::Camera;

/// Tracks a held pointer for drag panning in overview mode
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDrag {
    last: Option<(f32, f32)>,
}

impl PointerDrag {
    /// No drag in progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Button pressed at screen `(x, y)`
    pub fn begin(&mut self, x: f32, y: f32) {
        self.last = Some((x, y));
    }

    /// Button released or the press became a pick
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Whether the button is held
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Pointer moved to `(x, y)`; pans `camera` if a drag is in progress
    ///
    /// Pan speed grows with eye height: `eye.y / max_height * drag_speed`
    /// world units per pixel.
    pub fn drag_to(&mut self, x: f32, y: f32, camera: &mut Camera, max_height: f32, drag_speed: f32) {
        let Some((last_x, last_y)) = self.last else {
            return;
        };
        let speed = camera.position.y / max_height * drag_speed;
        let delta = Vec3::new((x - last_x) * speed, 0.0, -(y - last_y) * speed);
        camera.translate(&delta);
        self.last = Some((x, y));
        log::trace!("Drag pan by {:?}", delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;
    use crate::config::CameraConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_drag_scales_with_height() {
        let config = CameraConfig::default();
        let pose = CameraPose::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(0.0, 0.0, -50.0));
        let mut camera = Camera::new(pose, &config);
        let mut drag = PointerDrag::new();

        drag.begin(10.0, 10.0);
        drag.drag_to(20.0, 30.0, &mut camera, config.max_height, config.drag_speed);

        // 100 / 200 * 0.2 = 0.1 units per pixel
        assert_relative_eq!(camera.position, Vec3::new(1.0, 100.0, -2.0), epsilon = 1e-5);
        assert_relative_eq!(camera.target, Vec3::new(1.0, 0.0, -52.0), epsilon = 1e-5);
    }

    #[test]
    fn test_move_without_press_does_nothing() {
        let config = CameraConfig::default();
        let pose = CameraPose::new(Vec3::new(0.0, 50.0, 50.0), Vec3::zeros());
        let mut camera = Camera::new(pose, &config);
        let mut drag = PointerDrag::new();

        drag.drag_to(40.0, 40.0, &mut camera, config.max_height, config.drag_speed);
        drag.begin(0.0, 0.0);
        drag.end();
        drag.drag_to(40.0, 40.0, &mut camera, config.max_height, config.drag_speed);
        assert_eq!(camera.pose(), pose);
        assert!(!drag.is_dragging());
    }
}
