//! # Visual Effects
//!
//! Missile flights and the explosions they end in, expressed as staged
//! sequences over the keyframe player.
//!
//! - [`trajectory`]: pure arc sampler and playback speed
//! - [`sequence`]: stage queue consumed one stage at a time
//! - [`missile`] / [`explosion`]: the two effect definitions
//!
//! [`EffectManager`] owns the player and every running sequence and turns
//! stage completions into [`EffectEvent`]s.

pub mod trajectory;
pub mod sequence;
pub mod missile;
pub mod explosion;

use slotmap::{new_key_type, SlotMap};

use crate::animation::AnimationPlayer;
use crate::config::{ExplosionConfig, MissileConfig};
use crate::foundation::math::Vec3;
use crate::scene::{ObjectId, Scene};
use sequence::{EffectSequence, StageAction};

pub use trajectory::Trajectory;

new_key_type! {
    /// Handle to a running effect
    pub struct EffectId;
}

/// Notable moments in an effect's life
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectEvent {
    /// A stage finished and its actions ran
    StageCompleted {
        /// Effect the stage belonged to
        effect: EffectId,
        /// Stage name
        stage: &'static str,
    },
    /// A missile reached its target
    MissileArrived {
        /// Impact point
        at: Vec3,
    },
    /// An object was removed by an effect
    Disposed(ObjectId),
    /// An effect ran out of stages
    Finished(EffectId),
}

/// Runs missile and explosion sequences
#[derive(Debug)]
pub struct EffectManager {
    player: AnimationPlayer,
    effects: SlotMap<EffectId, EffectSequence>,
    missile: MissileConfig,
    explosion: ExplosionConfig,
}

impl EffectManager {
    /// Create a manager with the given effect settings
    pub fn new(missile: MissileConfig, explosion: ExplosionConfig) -> Self {
        Self {
            player: AnimationPlayer::new(),
            effects: SlotMap::with_key(),
            missile,
            explosion,
        }
    }

    /// Fire a missile from `attacker` at `victim`
    ///
    /// Both positions are captured now; returns `None` when either object no
    /// longer exists.
    pub fn launch_missile(&mut self, scene: &mut Scene, attacker: ObjectId, victim: ObjectId) -> Option<EffectId> {
        let start = scene.position(attacker)?;
        let end = scene.position(victim)?;
        let (_, _, sequence) = missile::spawn_missile(scene, start, end, Some(victim), &self.missile);
        Some(self.start(scene, sequence))
    }

    /// Set off an explosion at `at`
    pub fn explode(&mut self, scene: &mut Scene, at: Vec3, victim: Option<ObjectId>) -> EffectId {
        let (_, sequence) = explosion::spawn_explosion(scene, at, victim, &self.explosion);
        self.start(scene, sequence)
    }

    /// Number of effects still running
    pub fn active_count(&self) -> usize {
        self.effects.len()
    }

    /// Whether an effect is still running
    pub fn is_running(&self, id: EffectId) -> bool {
        self.effects.contains_key(id)
    }

    /// Name of the stage an effect is currently playing
    pub fn current_stage(&self, id: EffectId) -> Option<&'static str> {
        self.effects.get(id).and_then(EffectSequence::current_stage)
    }

    /// Advance every effect by `delta_time` seconds
    pub fn tick(&mut self, scene: &mut Scene, delta_time: f32) -> Vec<EffectEvent> {
        let finished = self.player.tick(scene, delta_time);
        let mut events = Vec::new();
        let mut actions = Vec::new();
        let mut done = Vec::new();

        for (id, sequence) in &mut self.effects {
            // A zero-length stage can complete as soon as it starts, so drain until one is still playing
            while let Some(stage) = sequence.advance(scene, &mut self.player, &finished) {
                log::debug!("{}: stage '{}' complete", sequence.label(), stage.name);
                events.push(EffectEvent::StageCompleted { effect: id, stage: stage.name });
                actions.extend(stage.on_complete);
            }
            if sequence.is_finished() {
                done.push(id);
            }
        }

        for id in done {
            self.effects.remove(id);
            events.push(EffectEvent::Finished(id));
        }

        for action in actions {
            match action {
                StageAction::Dispose(object) => {
                    if scene.dispose(object).is_some() {
                        events.push(EffectEvent::Disposed(object));
                    }
                }
                StageAction::Explode { at, victim } => {
                    events.push(EffectEvent::MissileArrived { at });
                    self.explode(scene, at, victim);
                }
            }
        }

        events
    }

    fn start(&mut self, scene: &mut Scene, mut sequence: EffectSequence) -> EffectId {
        sequence.start(scene, &mut self.player);
        self.effects.insert(sequence)
    }
}
