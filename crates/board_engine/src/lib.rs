//! # Board Engine
//!
//! Scene logic for an interactive 3D board-game demo: an orbit camera with
//! remapped keyboard input, a selection and focus state machine that flies
//! the camera between the board overview and a single piece, missile
//! trajectories and staged explosion effects. A small hex grid demo shares
//! the same configuration and logging stack.
//!
//! Rendering, hit-testing and asset loading are the host engine's job. The
//! host forwards input events (with the picked object already resolved) and
//! calls [`session::BoardSession::tick`] once per frame.
//!
//! ## Features
//!
//! - **Camera input**: pan and rotate keyboard behaviours, drag panning, wheel zoom
//! - **Focus**: overview/close-up state machine with exponential camera moves
//! - **Effects**: arc trajectories and stage queues driving keyframe playback
//! - **Configuration**: every tunable loadable from `.toml` or `.ron`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use board_engine::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = DemoConfig::load_or_default(Some("board.toml"))?;
//!     let mut session = BoardSession::new(config);
//!
//!     let attacker = session.board().pieces[0];
//!     let victim = session.board().pieces[1];
//!     let pick = |id, button| PointerEvent::new(PointerEventKind::Pick, 0.0, 0.0)
//!         .with_button(button)
//!         .with_picked(id);
//!     session.on_pointer(pick(attacker, MouseButton::Left));
//!     session.on_pointer(pick(victim, MouseButton::Right));
//!
//!     for _ in 0..60 {
//!         session.tick(1.0 / 60.0);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod foundation;
pub mod config;
pub mod input;
pub mod scene;
pub mod animation;
pub mod effects;
pub mod camera;
pub mod focus;
pub mod selection;
pub mod session;
pub mod hex_grid;

#[cfg(test)]
mod tests;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        camera::{Camera, CameraPose, InputBehavior, KeyboardCameraInput},
        config::{Config, ConfigError, DemoConfig},
        effects::{EffectEvent, EffectId, EffectManager, Trajectory},
        focus::{FocusChange, FocusController, FocusState},
        foundation::math::{Vec2, Vec3},
        hex_grid::{HexGridPanel, HexOffsetTable},
        input::{KeyCode, KeyboardEvent, MouseButton, PointerEvent, PointerEventKind},
        scene::{Board, ObjectId, Scene},
        selection::Selection,
        session::{BoardSession, SessionEvent},
    };
}
