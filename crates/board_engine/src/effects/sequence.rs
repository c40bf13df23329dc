//! Staged effect sequences
//!
//! A sequence is a queue of stages. Each stage starts a set of clips; once
//! every clip of the stage has finished, the stage's actions run and the
//! next stage starts. Ordering lives in the queue rather than in nested
//! completion callbacks.

use std::collections::VecDeque;

use crate::animation::{AnimationClip, AnimationPlayer, PlaybackId};
use crate::foundation::math::Vec3;
use crate::scene::{ObjectId, Scene};

/// Follow-up work a stage performs when it completes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageAction {
    /// Remove an object from the scene
    Dispose(ObjectId),
    /// Start an explosion at `at`; `victim` is removed once it has played out
    Explode {
        /// Impact point
        at: Vec3,
        /// Object that was hit, if it still matters
        victim: Option<ObjectId>,
    },
}

/// One step of a sequence
#[derive(Debug, Clone)]
pub struct EffectStage {
    /// Debug name, also reported in stage events
    pub name: &'static str,
    /// Clips started together when the stage begins
    pub clips: Vec<(ObjectId, AnimationClip)>,
    /// Actions run when every clip has finished
    pub on_complete: Vec<StageAction>,
}

impl EffectStage {
    /// Stage with no clips or actions yet
    pub fn new(name: &'static str) -> Self {
        Self { name, clips: Vec::new(), on_complete: Vec::new() }
    }

    /// Add a clip (builder pattern)
    pub fn with_clip(mut self, target: ObjectId, clip: AnimationClip) -> Self {
        self.clips.push((target, clip));
        self
    }

    /// Add a completion action (builder pattern)
    pub fn then(mut self, action: StageAction) -> Self {
        self.on_complete.push(action);
        self
    }
}

/// A queue of stages consumed one at a time
#[derive(Debug)]
pub struct EffectSequence {
    label: &'static str,
    pending: VecDeque<EffectStage>,
    current: Option<EffectStage>,
    running: Vec<PlaybackId>,
}

impl EffectSequence {
    /// Sequence over `stages`; nothing plays until [`EffectSequence::start`]
    pub fn new(label: &'static str, stages: impl IntoIterator<Item = EffectStage>) -> Self {
        Self {
            label,
            pending: stages.into_iter().collect(),
            current: None,
            running: Vec::new(),
        }
    }

    /// Sequence label
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Name of the stage currently playing
    pub fn current_stage(&self) -> Option<&'static str> {
        self.current.as_ref().map(|stage| stage.name)
    }

    /// Number of stages not started yet
    pub fn remaining_stages(&self) -> usize {
        self.pending.len()
    }

    /// Whether every stage has completed
    pub fn is_finished(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }

    /// Start the first stage
    pub fn start(&mut self, scene: &mut Scene, player: &mut AnimationPlayer) {
        if self.current.is_none() {
            self.begin_next(scene, player);
        }
    }

    /// Forget playbacks that finished; once the current stage has none left,
    /// return it so the caller can run its actions, and start the next one.
    pub fn advance(
        &mut self,
        scene: &mut Scene,
        player: &mut AnimationPlayer,
        finished: &[PlaybackId],
    ) -> Option<EffectStage> {
        self.running.retain(|id| !finished.contains(id));
        if !self.running.is_empty() || self.current.is_none() {
            return None;
        }

        let completed = self.current.take();
        self.begin_next(scene, player);
        completed
    }

    fn begin_next(&mut self, scene: &mut Scene, player: &mut AnimationPlayer) {
        let Some(stage) = self.pending.pop_front() else {
            return;
        };
        log::debug!("{}: entering stage '{}'", self.label, stage.name);
        self.running = stage
            .clips
            .iter()
            .map(|(target, clip)| player.play(scene, *target, clip.clone()))
            .collect();
        self.current = Some(stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{KeyframeTable, Track};
    use crate::scene::{ObjectKind, SceneObject};

    fn spin(speed: f32) -> AnimationClip {
        let table = KeyframeTable::from_fn(24.0, 24, |t| t);
        AnimationClip::new("spin", 24.0, vec![Track::RotationY(table)]).with_speed(speed)
    }

    #[test]
    fn test_stages_run_in_order() {
        let mut scene = Scene::new();
        let mut player = AnimationPlayer::new();
        let a = scene.spawn(SceneObject::new("a", ObjectKind::ExplosionCloud, Vec3::zeros()));
        let b = scene.spawn(SceneObject::new("b", ObjectKind::ExplosionStem, Vec3::zeros()));

        let mut sequence = EffectSequence::new(
            "test",
            [
                EffectStage::new("first").with_clip(a, spin(1.0)).with_clip(b, spin(0.5)),
                EffectStage::new("second").with_clip(a, spin(1.0)).then(StageAction::Dispose(a)),
            ],
        );
        sequence.start(&mut scene, &mut player);
        assert_eq!(sequence.current_stage(), Some("first"));

        // After one second only the fast clip is done; the stage waits for both
        let finished = player.tick(&mut scene, 1.0);
        assert_eq!(finished.len(), 1);
        assert!(sequence.advance(&mut scene, &mut player, &finished).is_none());
        assert_eq!(sequence.current_stage(), Some("first"));

        let finished = player.tick(&mut scene, 1.0);
        let completed = sequence.advance(&mut scene, &mut player, &finished).unwrap();
        assert_eq!(completed.name, "first");
        assert_eq!(sequence.current_stage(), Some("second"));

        let finished = player.tick(&mut scene, 1.0);
        let completed = sequence.advance(&mut scene, &mut player, &finished).unwrap();
        assert_eq!(completed.on_complete, vec![StageAction::Dispose(a)]);
        assert!(sequence.is_finished());
    }
}
