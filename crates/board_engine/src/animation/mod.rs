//! # Keyframe Animation
//!
//! Keyframe tables and a player that drives scene object properties from
//! them. Completion is reported as a list of finished playbacks returned by
//! [`AnimationPlayer::tick`] instead of through callbacks, so callers decide
//! what happens next in plain sequential code.

pub mod keyframe;
pub mod player;

pub use keyframe::{Keyframe, KeyframeTable, Lerp};
pub use player::{AnimationClip, AnimationPlayer, PlaybackId, Track};
