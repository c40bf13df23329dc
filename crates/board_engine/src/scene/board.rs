//! Checkerboard layout
//!
//! Lays out the board surface and scatters pieces over it. Pieces take the
//! color opposite to the square they stand on, and pieces on the first rank
//! are red.

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::objects::{ObjectId, ObjectKind, PieceColor, PieceShape, Scene, SceneObject};
use crate::config::BoardConfig;
use crate::foundation::math::Vec3;

/// Handles to the objects making up a generated board
#[derive(Debug, Clone)]
pub struct Board {
    /// The board plane
    pub surface: ObjectId,
    /// Every piece placed on the board, in placement order
    pub pieces: Vec<ObjectId>,
    /// Center of the board on the ground plane
    pub center: Vec3,
}

/// Generates a [`Board`] into a [`Scene`]
pub struct BoardBuilder<R: Rng> {
    config: BoardConfig,
    rng: R,
}

impl BoardBuilder<StdRng> {
    /// Builder seeded from the config, or from entropy when no seed is set
    pub fn from_config(config: &BoardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config.clone(), rng)
    }
}

impl<R: Rng> BoardBuilder<R> {
    /// Builder drawing piece placement from `rng`
    pub fn with_rng(config: BoardConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Spawn the board surface and its pieces
    pub fn build(mut self, scene: &mut Scene) -> Board {
        let size = self.config.square_size;
        let length = self.config.squares_per_side;
        let center = self.config.center();
        let center = Vec3::new(center, 0.0, center);

        let surface = scene.spawn(SceneObject::new("square", ObjectKind::BoardSurface, center));

        let mut pieces = Vec::new();
        let mut black_square = true;
        for i in 0..length * length {
            let x = i / length;
            let z = i % length;

            // Even-sized boards need an extra flip so each rank starts on the opposite color
            if z == 0 && length % 2 == 0 {
                black_square = !black_square;
            }

            if self.rng.gen_bool(self.config.piece_chance) {
                let shape = if self.rng.gen_bool(0.5) { PieceShape::Box } else { PieceShape::Sphere };
                let color = if z == 0 {
                    PieceColor::Red
                } else if black_square {
                    PieceColor::Black
                } else {
                    PieceColor::White
                };
                let name = match shape {
                    PieceShape::Box => "box",
                    PieceShape::Sphere => "sphere",
                };
                let position = Vec3::new(x as f32 * size, self.config.piece_height, z as f32 * size);
                pieces.push(scene.spawn(SceneObject::new(name, ObjectKind::Piece { shape, color }, position)));
            }

            black_square = !black_square;
        }

        log::info!("Board generated: {}x{} squares, {} pieces", length, length, pieces.len());
        Board { surface, pieces, center }
    }
}
