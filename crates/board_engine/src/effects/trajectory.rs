//! # Missile Trajectory
//!
//! Parametric arc between two world positions. The horizontal part is a
//! straight lerp from start to end; the vertical part adds
//! `peak_height * sin(pi * t)` on top, so the arc leaves and lands at the
//! endpoints' own heights and tops out halfway.
//!
//! Everything here is a pure function of its inputs.

use crate::animation::KeyframeTable;
use crate::config::MissileConfig;
use crate::foundation::math::{constants::PI, utils, Vec3};

/// Arc height above the straight line at parameter `t` in `[0, 1]`
pub fn arc_lift(peak_height: f32, t: f32) -> f32 {
    peak_height * (PI * t).sin()
}

/// Position along the arc at parameter `t` in `[0, 1]`
pub fn arc_point(start: &Vec3, end: &Vec3, peak_height: f32, t: f32) -> Vec3 {
    let mut point = utils::lerp_vec3(start, end, t);
    point.y += arc_lift(peak_height, t);
    point
}

/// `samples` positions spread uniformly over `t` in `[0, 1]`
///
/// Fewer than two samples are raised to two so both endpoints are always
/// present.
pub fn sample_arc(start: &Vec3, end: &Vec3, peak_height: f32, samples: usize) -> Vec<Vec3> {
    let samples = samples.max(2);
    let last = (samples - 1) as f32;
    (0..samples)
        .map(|i| arc_point(start, end, peak_height, i as f32 / last))
        .collect()
}

/// Keyframe table of the arc: sample `i` sits at frame `fps * t`
pub fn arc_table(start: &Vec3, end: &Vec3, peak_height: f32, samples: usize, fps: f32) -> KeyframeTable<Vec3> {
    KeyframeTable::from_fn(fps, samples, |t| arc_point(start, end, peak_height, t))
}

/// Playback speed ratio for a flight over `distance`
///
/// Short hops are clamped to `min_speed` so they do not play back too fast
/// relative to long ones.
pub fn playback_speed(distance: f32, config: &MissileConfig) -> f32 {
    (distance / config.speed_distance).max(config.min_speed) * config.speed_scale
}

/// Unit direction from `start` to `end` on the ground plane
///
/// Returns zero when the endpoints share x and z, instead of dividing by a
/// zero length.
pub fn heading(start: &Vec3, end: &Vec3) -> Vec3 {
    let flat = Vec3::new(end.x - start.x, 0.0, end.z - start.z);
    utils::try_normalize(&flat).unwrap_or_else(Vec3::zeros)
}

/// A planned flight: the keyframe table plus how fast to play it
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Arc samples keyed by frame
    pub table: KeyframeTable<Vec3>,
    /// Straight-line distance between the endpoints
    pub distance: f32,
    /// Playback speed ratio
    pub speed_ratio: f32,
    /// Ground-plane direction of travel, zero for vertical or empty flights
    pub heading: Vec3,
}

impl Trajectory {
    /// Plan a flight from `start` to `end`
    pub fn plan(start: &Vec3, end: &Vec3, config: &MissileConfig) -> Self {
        let distance = (end - start).norm();
        let speed_ratio = playback_speed(distance, config);
        log::debug!(
            "Planned trajectory over {:.2} units at speed {:.2}",
            distance,
            speed_ratio
        );
        Self {
            table: arc_table(start, end, config.peak_height, config.samples, config.fps),
            distance,
            speed_ratio,
            heading: heading(start, end),
        }
    }

    /// Rotation about y that turns a +z-facing object along the heading
    ///
    /// `None` for flights without a horizontal component.
    pub fn yaw(&self) -> Option<f32> {
        if self.heading == Vec3::zeros() {
            None
        } else {
            Some(self.heading.x.atan2(self.heading.z))
        }
    }

    /// Flight time in seconds at `fps`
    pub fn flight_time(&self, fps: f32) -> f32 {
        self.table.last_frame() / (fps * self.speed_ratio)
    }
}
