//! # Scene Object Model
//!
//! Minimal stand-in for the host engine's scene graph: a generational store
//! of visual objects exposing the contract the camera, selection and effect
//! logic relies on (world position, highlight flag, disposal).
//!
//! - [`objects`]: the [`Scene`] store, [`SceneObject`] and [`ObjectId`] handles
//! - [`board`]: checkerboard layout with randomly placed pieces

pub mod objects;
pub mod board;

pub use objects::{ObjectId, ObjectKind, PieceColor, PieceShape, Scene, SceneObject};
pub use board::{Board, BoardBuilder};
