//! Keyframe playback
//!
//! An [`AnimationClip`] bundles one or more property tracks with a frame
//! range, a keyframe rate and a speed ratio. The [`AnimationPlayer`] advances
//! every running clip by `fps * speed_ratio * delta_time` frames per tick,
//! writes the sampled values into the target object, and reports clips that
//! reached their last frame.

use slotmap::{new_key_type, SlotMap};

use super::keyframe::KeyframeTable;
use crate::foundation::math::Vec3;
use crate::scene::{ObjectId, Scene, SceneObject};

new_key_type! {
    /// Handle to a running playback
    pub struct PlaybackId;
}

/// A keyframe table bound to one property path of a scene object
#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    /// `position`
    Position(KeyframeTable<Vec3>),
    /// `position.y`
    PositionY(KeyframeTable<f32>),
    /// `scaling`
    Scaling(KeyframeTable<Vec3>),
    /// `rotation.y`
    RotationY(KeyframeTable<f32>),
}

impl Track {
    /// Property path this track animates
    pub fn property_path(&self) -> &'static str {
        match self {
            Self::Position(_) => "position",
            Self::PositionY(_) => "position.y",
            Self::Scaling(_) => "scaling",
            Self::RotationY(_) => "rotation.y",
        }
    }

    /// Frame of the last key
    pub fn last_frame(&self) -> f32 {
        match self {
            Self::Position(table) | Self::Scaling(table) => table.last_frame(),
            Self::PositionY(table) | Self::RotationY(table) => table.last_frame(),
        }
    }

    fn apply(&self, object: &mut SceneObject, frame: f32) {
        match self {
            Self::Position(table) => object.position = table.sample(frame),
            Self::PositionY(table) => object.position.y = table.sample(frame),
            Self::Scaling(table) => object.scaling = table.sample(frame),
            Self::RotationY(table) => object.rotation_y = table.sample(frame),
        }
    }
}

/// Tracks played together over a frame range
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Debug name
    pub name: String,
    /// Property tracks
    pub tracks: Vec<Track>,
    /// Keyframe rate of the tables
    pub fps: f32,
    /// First frame to play
    pub from: f32,
    /// Last frame to play
    pub to: f32,
    /// Playback speed multiplier
    pub speed_ratio: f32,
}

impl AnimationClip {
    /// Clip over the full range of its tracks at normal speed
    pub fn new(name: impl Into<String>, fps: f32, tracks: Vec<Track>) -> Self {
        let to = tracks.iter().map(Track::last_frame).fold(0.0, f32::max);
        Self {
            name: name.into(),
            tracks,
            fps,
            from: 0.0,
            to,
            speed_ratio: 1.0,
        }
    }

    /// Set the speed ratio (builder pattern)
    pub fn with_speed(mut self, speed_ratio: f32) -> Self {
        self.speed_ratio = speed_ratio;
        self
    }

    /// Property paths the clip animates, in track order
    pub fn property_paths(&self) -> Vec<&'static str> {
        self.tracks.iter().map(Track::property_path).collect()
    }

    /// Wall-clock length of the clip in seconds
    pub fn duration(&self) -> f32 {
        let rate = self.fps * self.speed_ratio;
        if rate <= 0.0 {
            return f32::INFINITY;
        }
        (self.to - self.from).max(0.0) / rate
    }
}

#[derive(Debug)]
struct Playback {
    target: ObjectId,
    clip: AnimationClip,
    frame: f32,
}

/// Drives clips on scene objects
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    playbacks: SlotMap<PlaybackId, Playback>,
}

impl AnimationPlayer {
    /// Create an idle player
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `clip` on `target`; the first frame is applied immediately
    pub fn play(&mut self, scene: &mut Scene, target: ObjectId, clip: AnimationClip) -> PlaybackId {
        log::debug!(
            "Playing '{}' ({:.2}s) on {:?}: {}",
            clip.name,
            clip.duration(),
            target,
            clip.property_paths().join(", ")
        );
        if let Some(object) = scene.get_mut(target) {
            for track in &clip.tracks {
                track.apply(object, clip.from);
            }
        }
        let frame = clip.from;
        self.playbacks.insert(Playback { target, clip, frame })
    }

    /// Stop a playback without reporting it as finished
    pub fn stop(&mut self, id: PlaybackId) -> bool {
        self.playbacks.remove(id).is_some()
    }

    /// Whether a playback is still running
    pub fn is_playing(&self, id: PlaybackId) -> bool {
        self.playbacks.contains_key(id)
    }

    /// Number of running playbacks
    pub fn active_count(&self) -> usize {
        self.playbacks.len()
    }

    /// Advance every playback by `delta_time` seconds
    ///
    /// Returns the playbacks that finished during this tick. A playback whose
    /// target has been disposed finishes immediately.
    pub fn tick(&mut self, scene: &mut Scene, delta_time: f32) -> Vec<PlaybackId> {
        let mut finished = Vec::new();

        for (id, playback) in &mut self.playbacks {
            let Some(object) = scene.get_mut(playback.target) else {
                log::debug!("Target of '{}' was disposed, finishing early", playback.clip.name);
                finished.push(id);
                continue;
            };

            let clip = &playback.clip;
            playback.frame = (playback.frame + clip.fps * clip.speed_ratio * delta_time).min(clip.to);
            for track in &clip.tracks {
                track.apply(object, playback.frame);
            }

            if playback.frame >= clip.to {
                finished.push(id);
            }
        }

        for id in &finished {
            self.playbacks.remove(*id);
        }
        finished
    }
}
