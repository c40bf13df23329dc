//! Explosion effect
//!
//! A mushroom cloud and its stem, played in three stages:
//! 1. `rise`: both objects climb into place while growing and turning
//! 2. `spin`: one full turn at reduced speed
//! 3. `fade`: one more, much slower turn, after which both are removed
//!
//! Particles, lights and sound belong to the host engine and are not modelled.

use super::sequence::{EffectSequence, EffectStage, StageAction};
use crate::animation::{AnimationClip, KeyframeTable, Track};
use crate::config::ExplosionConfig;
use crate::foundation::math::{constants::TAU, utils, Vec3};
use crate::scene::{ObjectId, ObjectKind, Scene, SceneObject};

/// Objects spawned for one explosion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionParts {
    /// Mushroom cloud
    pub cloud: ObjectId,
    /// Stem below the cloud
    pub stem: ObjectId,
}

fn height_track(config: &ExplosionConfig, from: f32, to: f32) -> Track {
    Track::PositionY(KeyframeTable::from_fn(config.fps, config.samples, |t| utils::lerp(from, to, t)))
}

fn scale_track(config: &ExplosionConfig, to: f32) -> Track {
    let from = config.start_scale;
    Track::Scaling(KeyframeTable::from_fn(config.fps, config.samples, |t| {
        let scale = utils::lerp(from, to, t);
        Vec3::new(scale, scale, scale)
    }))
}

fn turn_track(config: &ExplosionConfig) -> Track {
    Track::RotationY(KeyframeTable::from_fn(config.fps, config.samples, |t| utils::lerp(0.0, TAU, t)))
}

fn turn_clip(config: &ExplosionConfig, name: &str, speed: f32) -> AnimationClip {
    AnimationClip::new(name, config.fps, vec![turn_track(config)]).with_speed(speed)
}

/// Spawn the cloud and stem at `at` and build the staged sequence
///
/// When `victim` is given it is disposed together with the cloud and stem at
/// the end of the last stage.
pub fn spawn_explosion(
    scene: &mut Scene,
    at: Vec3,
    victim: Option<ObjectId>,
    config: &ExplosionConfig,
) -> (ExplosionParts, EffectSequence) {
    let cloud = scene.spawn(
        SceneObject::new("cloud", ObjectKind::ExplosionCloud, at).with_uniform_scale(config.start_scale),
    );
    let stem_start = Vec3::new(at.x, at.y - config.stem_depth, at.z);
    let stem = scene.spawn(
        SceneObject::new("stem", ObjectKind::ExplosionStem, stem_start).with_uniform_scale(config.start_scale),
    );

    let cloud_rise = AnimationClip::new(
        "cloud rise",
        config.fps,
        vec![
            height_track(config, at.y, at.y + config.cloud_rise),
            scale_track(config, config.cloud_max_scale),
            turn_track(config),
        ],
    )
    .with_speed(config.rise_speed);
    let stem_rise = AnimationClip::new(
        "stem rise",
        config.fps,
        vec![
            height_track(config, at.y - config.stem_depth, at.y),
            scale_track(config, config.stem_max_scale),
            turn_track(config),
        ],
    )
    .with_speed(config.rise_speed);

    let mut fade = EffectStage::new("fade")
        .with_clip(cloud, turn_clip(config, "cloud fade", config.fade_speed))
        .with_clip(stem, turn_clip(config, "stem fade", config.fade_speed))
        .then(StageAction::Dispose(cloud))
        .then(StageAction::Dispose(stem));
    if let Some(victim) = victim {
        fade = fade.then(StageAction::Dispose(victim));
    }

    let stages = [
        EffectStage::new("rise").with_clip(cloud, cloud_rise).with_clip(stem, stem_rise),
        EffectStage::new("spin")
            .with_clip(cloud, turn_clip(config, "cloud spin", config.spin_speed))
            .with_clip(stem, turn_clip(config, "stem spin", config.spin_speed)),
        fade,
    ];

    log::debug!("Explosion spawned at {:?}", at);
    (ExplosionParts { cloud, stem }, EffectSequence::new("explosion", stages))
}

/// Total wall-clock length of an explosion in seconds
pub fn explosion_duration(config: &ExplosionConfig) -> f32 {
    let frames = config.fps;
    frames / (config.fps * config.rise_speed)
        + frames / (config.fps * config.spin_speed)
        + frames / (config.fps * config.fade_speed)
}
