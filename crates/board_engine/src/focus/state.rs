//! Focus states

use crate::camera::InputBehavior;
use crate::scene::ObjectId;

/// Where the camera is in the overview/close-up cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Looking at the whole board; keyboard pans
    #[default]
    Overview,
    /// Moving in on an object
    TransitioningToFocus(ObjectId),
    /// Close-up on an object; keyboard orbits
    Focused(ObjectId),
    /// Moving back out to the overview framing
    TransitioningToOverview,
}

impl FocusState {
    /// Whether the camera is moving between framings
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::TransitioningToFocus(_) | Self::TransitioningToOverview)
    }

    /// Whether the camera is at, or heading for, a close-up
    pub fn zoom_enabled(self) -> bool {
        matches!(self, Self::TransitioningToFocus(_) | Self::Focused(_))
    }

    /// Object at, or being moved to
    pub fn target(self) -> Option<ObjectId> {
        match self {
            Self::TransitioningToFocus(id) | Self::Focused(id) => Some(id),
            Self::Overview | Self::TransitioningToOverview => None,
        }
    }

    /// Keyboard behaviour that belongs to this state
    ///
    /// Transitions keep pan selected, but keyboard input is suppressed
    /// while they run anyway.
    pub fn input_behavior(self) -> InputBehavior {
        match self {
            Self::Focused(_) => InputBehavior::Rotate,
            _ => InputBehavior::Pan,
        }
    }
}
