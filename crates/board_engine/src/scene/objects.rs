//! Scene objects and their store
//!
//! Objects are addressed by [`ObjectId`], a generational key. Holding an id
//! never keeps an object alive: once [`Scene::dispose`] runs, lookups through
//! stale ids return `None`.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Vec3;

new_key_type! {
    /// Weak handle to a [`SceneObject`]
    pub struct ObjectId;
}

/// Shape of a board piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceShape {
    /// Cube with edge length 3
    Box,
    /// Sphere with diameter 3
    Sphere,
}

/// Material color of a board piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColor {
    /// Placed on a black square
    Black,
    /// Placed on a white square
    White,
    /// First rank
    Red,
}

/// What a scene object represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// The tiled board plane
    BoardSurface,
    /// A selectable game piece
    Piece {
        /// Mesh shape
        shape: PieceShape,
        /// Material color
        color: PieceColor,
    },
    /// Invisible carrier a missile's visuals are parented to
    Missile,
    /// Mushroom cloud of an explosion
    ExplosionCloud,
    /// Stem of an explosion
    ExplosionStem,
}

/// A visual object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Debug name
    pub name: String,
    /// What the object represents
    pub kind: ObjectKind,
    /// World position
    pub position: Vec3,
    /// Per-axis scale
    pub scaling: Vec3,
    /// Rotation about the y axis in radians
    pub rotation_y: f32,
    /// Whether the selection outline is drawn
    pub highlighted: bool,
}

impl SceneObject {
    /// Create an object at `position` with unit scale
    pub fn new(name: impl Into<String>, kind: ObjectKind, position: Vec3) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            scaling: Vec3::new(1.0, 1.0, 1.0),
            rotation_y: 0.0,
            highlighted: false,
        }
    }

    /// Set a uniform scale (builder pattern)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scaling = Vec3::new(scale, scale, scale);
        self
    }

    /// Pieces can be selected, focused and targeted; everything else is scenery
    pub fn is_selectable(&self) -> bool {
        matches!(self.kind, ObjectKind::Piece { .. })
    }
}

/// Store of every live scene object
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, SceneObject>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its handle
    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        log::trace!("Spawning '{}' at {:?}", object.name, object.position);
        self.objects.insert(object)
    }

    /// Remove an object; returns it if it was still alive
    pub fn dispose(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(id);
        if let Some(object) = &removed {
            log::trace!("Disposed '{}'", object.name);
        }
        removed
    }

    /// Look up an object
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Look up an object mutably
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    /// Whether `id` still refers to a live object
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// World position of a live object
    pub fn position(&self, id: ObjectId) -> Option<Vec3> {
        self.get(id).map(|object| object.position)
    }

    /// Whether `id` refers to a live selectable object
    pub fn is_selectable(&self, id: ObjectId) -> bool {
        self.get(id).is_some_and(SceneObject::is_selectable)
    }

    /// Set the outline flag of a live object; stale ids are ignored
    pub fn set_highlighted(&mut self, id: ObjectId, highlighted: bool) {
        if let Some(object) = self.get_mut(id) {
            object.highlighted = highlighted;
        }
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over live objects
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(x: f32) -> SceneObject {
        SceneObject::new(
            "piece",
            ObjectKind::Piece { shape: PieceShape::Box, color: PieceColor::White },
            Vec3::new(x, 1.5, 0.0),
        )
    }

    #[test]
    fn test_disposed_ids_go_stale() {
        let mut scene = Scene::new();
        let id = scene.spawn(piece(1.0));
        assert!(scene.contains(id));

        assert!(scene.dispose(id).is_some());
        assert!(!scene.contains(id));
        assert!(scene.get(id).is_none());
        assert!(scene.dispose(id).is_none());

        // A new object reusing the slot must not resurrect the old handle
        let other = scene.spawn(piece(2.0));
        assert_ne!(id, other);
        assert!(scene.get(id).is_none());
    }

    #[test]
    fn test_only_pieces_are_selectable() {
        let mut scene = Scene::new();
        let board = scene.spawn(SceneObject::new("square", ObjectKind::BoardSurface, Vec3::zeros()));
        let unit = scene.spawn(piece(0.0));

        assert!(!scene.is_selectable(board));
        assert!(scene.is_selectable(unit));
    }

    #[test]
    fn test_highlight_on_stale_id_is_ignored() {
        let mut scene = Scene::new();
        let id = scene.spawn(piece(0.0));
        scene.set_highlighted(id, true);
        assert!(scene.get(id).unwrap().highlighted);

        scene.dispose(id);
        scene.set_highlighted(id, true);
        assert!(scene.is_empty());
    }
}
