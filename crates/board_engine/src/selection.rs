//! Single-object selection with outline highlighting

use crate::scene::{ObjectId, Scene};

/// The currently selected piece, if any
///
/// The selected object carries the highlight flag; selecting another object
/// moves the flag over. Handles are weak, so a selection whose object was
/// disposed simply reads as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ObjectId>,
}

impl Selection {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected object if it still exists
    pub fn current(&self, scene: &Scene) -> Option<ObjectId> {
        self.selected.filter(|id| scene.contains(*id))
    }

    /// Whether `id` is the live selection
    pub fn is_selected(&self, scene: &Scene, id: ObjectId) -> bool {
        self.current(scene) == Some(id)
    }

    /// Replace the selection with `id`
    ///
    /// Returns `false` without changing anything when `id` is already
    /// selected or is not a selectable object.
    pub fn select(&mut self, scene: &mut Scene, id: ObjectId) -> bool {
        if self.is_selected(scene, id) || !scene.is_selectable(id) {
            return false;
        }
        if let Some(previous) = self.selected.take() {
            scene.set_highlighted(previous, false);
        }
        scene.set_highlighted(id, true);
        self.selected = Some(id);
        log::debug!("Selected {:?}", id);
        true
    }

    /// Drop the selection and its highlight
    pub fn clear(&mut self, scene: &mut Scene) {
        if let Some(previous) = self.selected.take() {
            scene.set_highlighted(previous, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::{ObjectKind, PieceColor, PieceShape, SceneObject};

    fn piece(scene: &mut Scene) -> ObjectId {
        scene.spawn(SceneObject::new(
            "box",
            ObjectKind::Piece { shape: PieceShape::Box, color: PieceColor::Red },
            Vec3::zeros(),
        ))
    }

    #[test]
    fn test_select_moves_highlight() {
        let mut scene = Scene::new();
        let a = piece(&mut scene);
        let b = piece(&mut scene);
        let mut selection = Selection::new();

        assert!(selection.select(&mut scene, a));
        assert!(scene.get(a).unwrap().highlighted);
        assert!(!selection.select(&mut scene, a));

        assert!(selection.select(&mut scene, b));
        assert!(!scene.get(a).unwrap().highlighted);
        assert!(scene.get(b).unwrap().highlighted);
        assert_eq!(selection.current(&scene), Some(b));
    }

    #[test]
    fn test_surface_is_not_selectable() {
        let mut scene = Scene::new();
        let surface = scene.spawn(SceneObject::new("square", ObjectKind::BoardSurface, Vec3::zeros()));
        let mut selection = Selection::new();
        assert!(!selection.select(&mut scene, surface));
        assert_eq!(selection.current(&scene), None);
    }

    #[test]
    fn test_disposed_selection_reads_empty() {
        let mut scene = Scene::new();
        let a = piece(&mut scene);
        let mut selection = Selection::new();
        selection.select(&mut scene, a);
        scene.dispose(a);
        assert_eq!(selection.current(&scene), None);

        selection.clear(&mut scene);
        assert_eq!(selection, Selection::new());
    }
}
