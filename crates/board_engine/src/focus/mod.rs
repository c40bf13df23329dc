//! # Selection Focus
//!
//! State machine that moves the camera between the board overview and a
//! close-up of a single piece.
//!
//! ```text
//! Overview --select--> TransitioningToFocus --settled--> Focused
//!    ^                        ^                             |
//!    |                        +-------select other----------+
//!    |                                                      |
//!    +--settled-- TransitioningToOverview <---deselect------+
//! ```
//!
//! Camera moves are exponential interpolations run by [`FocusController::tick`].
//! A request that arrives while a move is in flight replaces its goal.

pub mod state;

pub use state::FocusState;

use crate::camera::{Camera, CameraPose, InputBehavior};
use crate::config::CameraConfig;
use crate::foundation::math::Vec3;
use crate::input::KeyCode;
use crate::scene::ObjectId;

/// What a focus or deselect request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    /// Camera started moving in on an object
    Focusing(ObjectId),
    /// Camera started moving back to the overview
    Returning,
    /// Request had no effect
    Unchanged,
}

/// Drives the camera between overview and close-up framings
#[derive(Debug, Clone)]
pub struct FocusController {
    state: FocusState,
    goal: Option<CameraPose>,
    overview_anchor: Vec3,
    config: CameraConfig,
}

impl FocusController {
    /// Controller in `Overview`, anchored at `anchor`
    pub fn new(config: CameraConfig, anchor: Vec3) -> Self {
        Self {
            state: FocusState::Overview,
            goal: None,
            overview_anchor: Vec3::new(anchor.x, 0.0, anchor.z),
            config,
        }
    }

    /// Current state
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Whether a camera move is in flight
    pub fn animation_in_flight(&self) -> bool {
        self.goal.is_some()
    }

    /// Whether the camera is at, or heading for, a close-up
    pub fn zoom_enabled(&self) -> bool {
        self.state.zoom_enabled()
    }

    /// Pose the camera is moving to
    pub fn goal(&self) -> Option<&CameraPose> {
        self.goal.as_ref()
    }

    /// Ground-plane point the overview returns to
    pub fn overview_anchor(&self) -> Vec3 {
        self.overview_anchor
    }

    /// Keyboard behaviour for the current state
    pub fn input_behavior(&self) -> InputBehavior {
        self.state.input_behavior()
    }

    /// Ask for a close-up of `object` located at `position`
    ///
    /// - from `Overview` the camera target is recorded as the overview anchor
    /// - repeating the request for the object already being approached does nothing
    /// - requesting the focused object again returns to the overview
    /// - anything else retargets the move, the newest request wins
    pub fn request_focus(&mut self, object: ObjectId, position: &Vec3, camera: &mut Camera) -> FocusChange {
        match self.state {
            FocusState::TransitioningToFocus(current) if current == object => return FocusChange::Unchanged,
            FocusState::Focused(current) if current == object => return self.request_overview(camera),
            FocusState::Overview => {
                self.overview_anchor = Vec3::new(camera.target.x, 0.0, camera.target.z);
                log::debug!("Recorded overview anchor {:?}", self.overview_anchor);
            }
            _ => {}
        }

        let goal = CameraPose::focus(position, &camera.position, &self.config);
        self.begin_move(FocusState::TransitioningToFocus(object), goal, camera);
        FocusChange::Focusing(object)
    }

    /// Ask to return to the overview
    ///
    /// Ignored while already at, or heading for, the overview.
    pub fn request_overview(&mut self, camera: &mut Camera) -> FocusChange {
        if !self.state.zoom_enabled() {
            return FocusChange::Unchanged;
        }
        let goal = CameraPose::overview(&self.overview_anchor, &self.config);
        self.begin_move(FocusState::TransitioningToOverview, goal, camera);
        FocusChange::Returning
    }

    /// Key released; Escape and Space leave a settled close-up
    pub fn on_key_up(&mut self, key: KeyCode, camera: &mut Camera) -> FocusChange {
        if key.exits_focus() && matches!(self.state, FocusState::Focused(_)) {
            self.request_overview(camera)
        } else {
            FocusChange::Unchanged
        }
    }

    /// Advance an in-flight move by one frame
    ///
    /// Returns the new state on the frame the camera settles.
    pub fn tick(&mut self, camera: &mut Camera) -> Option<FocusState> {
        let goal = self.goal?;
        let mut pose = camera.pose();
        let settled = pose.settle_step(&goal, self.config.lerp_factor, self.config.settle_epsilon);
        camera.set_pose(pose);
        if !settled {
            return None;
        }

        self.goal = None;
        self.state = match self.state {
            FocusState::TransitioningToFocus(id) => FocusState::Focused(id),
            FocusState::TransitioningToOverview => FocusState::Overview,
            other => other,
        };
        log::debug!("Camera settled, focus state {:?}", self.state);
        self.check_invariants();
        Some(self.state)
    }

    fn begin_move(&mut self, next: FocusState, goal: CameraPose, camera: &mut Camera) {
        log::debug!("Focus state {:?} -> {:?}", self.state, next);
        // Orbit momentum from the close-up would fight the interpolation
        camera.inertial_alpha_offset = 0.0;
        camera.inertial_beta_offset = 0.0;
        self.state = next;
        self.goal = Some(goal);
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.goal.is_some(),
            self.state.is_transitioning(),
            "camera moves run exactly while transitioning"
        );
        debug_assert_eq!(self.overview_anchor.y, 0.0, "overview anchor lies on the ground plane");
    }
}
