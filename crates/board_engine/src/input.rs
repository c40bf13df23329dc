//! Input events delivered by the host surface
//!
//! The host hit-tests pointer events itself; a [`PointerEvent`] therefore
//! already carries the picked object, if any.

use crate::scene::ObjectId;

/// Key codes the scenes react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Any key the scenes do not handle
    Other,
}

/// Screen-relative direction a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left arrow or A
    Left,
    /// Right arrow or D
    Right,
    /// Up arrow or W
    Up,
    /// Down arrow or S
    Down,
}

impl KeyCode {
    /// Direction bound to this key, if it is one of the arrows or WASD
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Left | Self::A => Some(Direction::Left),
            Self::Right | Self::D => Some(Direction::Right),
            Self::Up | Self::W => Some(Direction::Up),
            Self::Down | Self::S => Some(Direction::Down),
            _ => None,
        }
    }

    /// Whether releasing this key leaves the focused view
    pub fn exits_focus(self) -> bool {
        matches!(self, Self::Escape | Self::Space)
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Kind of pointer notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEventKind {
    /// Button pressed
    Down,
    /// Button released
    Up,
    /// Pointer moved
    Move,
    /// Two taps in quick succession
    DoubleTap,
    /// Click that hit-tested an object
    Pick,
    /// Mouse wheel
    Wheel {
        /// Wheel delta in host units; positive zooms out
        delta: f32,
    },
}

/// Pointer notification with hit-test result and screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened
    pub kind: PointerEventKind,
    /// Button involved
    pub button: MouseButton,
    /// Screen x in pixels
    pub x: f32,
    /// Screen y in pixels
    pub y: f32,
    /// Object under the pointer
    pub picked: Option<ObjectId>,
}

impl PointerEvent {
    /// Create an event with the left button and nothing picked
    pub fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            button: MouseButton::Left,
            x,
            y,
            picked: None,
        }
    }

    /// Set the button (builder pattern)
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Set the hit-tested object (builder pattern)
    pub fn with_picked(mut self, picked: ObjectId) -> Self {
        self.picked = Some(picked);
        self
    }
}

/// Keyboard notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// Key pressed
    KeyDown(KeyCode),
    /// Key released
    KeyUp(KeyCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_share_directions() {
        assert_eq!(KeyCode::Left.direction(), Some(Direction::Left));
        assert_eq!(KeyCode::A.direction(), Some(Direction::Left));
        assert_eq!(KeyCode::W.direction(), Some(Direction::Up));
        assert_eq!(KeyCode::S.direction(), Some(Direction::Down));
        assert_eq!(KeyCode::Escape.direction(), None);
    }

    #[test]
    fn test_exit_keys() {
        assert!(KeyCode::Escape.exits_focus());
        assert!(KeyCode::Space.exits_focus());
        assert!(!KeyCode::W.exits_focus());
    }

    #[test]
    fn test_wheel_events_compare_by_delta() {
        let wheel = |delta| PointerEvent::new(PointerEventKind::Wheel { delta }, 0.0, 0.0);
        assert_eq!(wheel(1.5), wheel(1.5));
        assert_ne!(wheel(1.5), wheel(-1.5));
        assert_ne!(wheel(f32::NAN).kind, wheel(f32::NAN).kind);
    }
}
