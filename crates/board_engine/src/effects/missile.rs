//! Missile effect
//!
//! A carrier object flies the arc from attacker to victim. Landing removes
//! the carrier and sets off an explosion at the impact point.

use super::sequence::{EffectSequence, EffectStage, StageAction};
use super::trajectory::Trajectory;
use crate::animation::{AnimationClip, Track};
use crate::config::MissileConfig;
use crate::foundation::math::Vec3;
use crate::scene::{ObjectId, ObjectKind, Scene, SceneObject};

/// Carrier scale relative to its 0.7 unit base sphere
const CARRIER_SCALE: f32 = 2.0;

/// Spawn the carrier at `start` and build its flight sequence toward `end`
pub fn spawn_missile(
    scene: &mut Scene,
    start: Vec3,
    end: Vec3,
    victim: Option<ObjectId>,
    config: &MissileConfig,
) -> (ObjectId, Trajectory, EffectSequence) {
    let trajectory = Trajectory::plan(&start, &end, config);
    let mut object = SceneObject::new("missile", ObjectKind::Missile, start).with_uniform_scale(CARRIER_SCALE);
    if let Some(yaw) = trajectory.yaw() {
        object.rotation_y = yaw;
    }
    let carrier = scene.spawn(object);

    let clip = AnimationClip::new("missile flight", config.fps, vec![Track::Position(trajectory.table.clone())])
        .with_speed(trajectory.speed_ratio);
    let flight = EffectStage::new("flight")
        .with_clip(carrier, clip)
        .then(StageAction::Dispose(carrier))
        .then(StageAction::Explode { at: end, victim });

    log::info!(
        "Missile launched: {:.1} units, {:.2}s flight",
        trajectory.distance,
        trajectory.flight_time(config.fps)
    );
    (carrier, trajectory, EffectSequence::new("missile", [flight]))
}
