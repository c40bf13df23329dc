//! # Board Session
//!
//! One context object that owns everything the board scene mutates: the
//! scene graph, the camera and its inputs, the focus state machine, the
//! selection and the running effects. The host feeds it pointer and keyboard
//! events plus a per-frame [`BoardSession::tick`].
//!
//! ## Frame order
//! 1. Held direction keys are applied (skipped while the camera animates)
//! 2. Orbit offsets are applied to the camera
//! 3. An in-flight focus move advances one frame
//! 4. Effects advance by the frame time
//!
//! ## Usage
//! ```no_run
//! use board_engine::prelude::*;
//!
//! let mut session = BoardSession::new(DemoConfig::default());
//! let piece = session.board().pieces[0];
//! session.on_pointer(PointerEvent::new(PointerEventKind::DoubleTap, 0.0, 0.0).with_picked(piece));
//! for _ in 0..200 {
//!     session.tick(1.0 / 60.0);
//! }
//! ```

use rand::Rng;

use crate::camera::{Camera, CameraPose, KeyboardCameraInput, PointerDrag};
use crate::config::DemoConfig;
use crate::effects::{EffectEvent, EffectId, EffectManager};
use crate::focus::{FocusChange, FocusController, FocusState};
use crate::input::{KeyboardEvent, MouseButton, PointerEvent, PointerEventKind};
use crate::scene::{Board, BoardBuilder, ObjectId, Scene};
use crate::selection::Selection;

/// Something the session did in response to input or time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// An object became the selection
    Selected(ObjectId),
    /// The focus state machine accepted a request
    Focus(FocusChange),
    /// A camera move settled into this state
    Settled(FocusState),
    /// A missile left the attacker
    MissileLaunched {
        /// Running effect
        effect: EffectId,
        /// Firing piece
        attacker: ObjectId,
        /// Target piece
        victim: ObjectId,
    },
    /// Progress of a running effect
    Effect(EffectEvent),
}

/// Board scene state and input dispatch
#[derive(Debug)]
pub struct BoardSession {
    config: DemoConfig,
    scene: Scene,
    board: Board,
    camera: Camera,
    keyboard: KeyboardCameraInput,
    focus: FocusController,
    selection: Selection,
    effects: EffectManager,
    drag: PointerDrag,
    elapsed: f32,
}

impl BoardSession {
    /// Build the board from `config`, seeded as the board config says
    pub fn new(config: DemoConfig) -> Self {
        let builder = BoardBuilder::from_config(&config.board);
        let mut scene = Scene::new();
        let board = builder.build(&mut scene);
        Self::from_parts(config, scene, board)
    }

    /// Build the board with piece placement drawn from `rng`
    pub fn with_rng<R: Rng>(config: DemoConfig, rng: R) -> Self {
        let mut scene = Scene::new();
        let board = BoardBuilder::with_rng(config.board.clone(), rng).build(&mut scene);
        Self::from_parts(config, scene, board)
    }

    fn from_parts(config: DemoConfig, scene: Scene, board: Board) -> Self {
        let pose = CameraPose::overview(&board.center, &config.camera);
        let camera = Camera::new(pose, &config.camera);
        let mut keyboard = KeyboardCameraInput::new(&config.camera);
        keyboard.attach();
        let focus = FocusController::new(config.camera.clone(), board.center);
        let effects = EffectManager::new(config.missile.clone(), config.explosion.clone());

        log::info!(
            "Board session ready: {} pieces, camera at {:?}",
            board.pieces.len(),
            camera.position
        );

        Self {
            config,
            scene,
            board,
            camera,
            keyboard,
            focus,
            selection: Selection::new(),
            effects,
            drag: PointerDrag::new(),
            elapsed: 0.0,
        }
    }

    /// Configuration the session was built from
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Scene graph
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Generated board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Keyboard camera input
    pub fn keyboard(&self) -> &KeyboardCameraInput {
        &self.keyboard
    }

    /// Focus state machine
    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    /// Current focus state
    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    /// Live selection
    pub fn selected(&self) -> Option<ObjectId> {
        self.selection.current(&self.scene)
    }

    /// Running effects
    pub fn effects(&self) -> &EffectManager {
        &self.effects
    }

    /// Seconds of simulated time so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the camera is moving between framings
    pub fn animation_in_flight(&self) -> bool {
        self.focus.animation_in_flight()
    }

    /// Stop listening to the keyboard; held keys are dropped
    pub fn detach_input(&mut self) {
        self.keyboard.detach();
        self.drag.end();
    }

    /// Resume listening to the keyboard
    pub fn attach_input(&mut self) {
        self.keyboard.attach();
    }

    /// Handle a pointer event
    ///
    /// Everything is ignored while the camera animates, so a move cannot be
    /// interrupted halfway into a half-updated target.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.focus.animation_in_flight() {
            log::trace!("Pointer {:?} ignored while the camera moves", event.kind);
            return events;
        }

        let zoomed = self.focus.zoom_enabled();
        let selectable = event.picked.filter(|id| self.scene.is_selectable(*id));

        match event.kind {
            PointerEventKind::Down if !zoomed => self.drag.begin(event.x, event.y),
            PointerEventKind::Up if !zoomed => self.drag.end(),
            PointerEventKind::Move => {
                let camera = &self.config.camera;
                self.drag
                    .drag_to(event.x, event.y, &mut self.camera, camera.max_height, camera.drag_speed);
            }
            PointerEventKind::Wheel { delta } => self.camera.zoom(delta),
            PointerEventKind::DoubleTap if event.button == MouseButton::Left => match selectable {
                Some(id) => {
                    self.drag.end();
                    if self.selection.select(&mut self.scene, id) {
                        events.push(SessionEvent::Selected(id));
                    }
                    self.push_focus(&mut events, id);
                }
                None if zoomed => self.push_overview(&mut events),
                None => {}
            },
            PointerEventKind::Pick => {
                self.drag.end();
                match (event.button, selectable) {
                    (MouseButton::Left, Some(id)) => {
                        if self.selection.select(&mut self.scene, id) {
                            events.push(SessionEvent::Selected(id));
                            if zoomed {
                                self.push_focus(&mut events, id);
                            }
                        }
                    }
                    (MouseButton::Left, None) if zoomed => self.push_overview(&mut events),
                    (MouseButton::Right, Some(victim)) => self.fire_at(&mut events, victim),
                    _ => {}
                }
            }
            _ => {}
        }
        events
    }

    /// Handle a keyboard event
    pub fn on_keyboard(&mut self, event: KeyboardEvent) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match event {
            KeyboardEvent::KeyDown(key) => {
                self.keyboard.key_down(key);
            }
            KeyboardEvent::KeyUp(key) => {
                self.keyboard.key_up(key);
                let change = self.focus.on_key_up(key, &mut self.camera);
                if change != FocusChange::Unchanged {
                    log::debug!("{:?} released, leaving close-up", key);
                }
                self.apply_focus_change(&mut events, change);
            }
        }
        events
    }

    /// Advance the scene by `delta_time` seconds
    pub fn tick(&mut self, delta_time: f32) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.elapsed += delta_time;

        let animating = self.focus.animation_in_flight();
        self.keyboard.check_inputs(&mut self.camera, delta_time, animating);
        if !animating {
            self.camera.update_orbit();
        }

        if let Some(state) = self.focus.tick(&mut self.camera) {
            self.sync_behavior();
            events.push(SessionEvent::Settled(state));
        }

        for event in self.effects.tick(&mut self.scene, delta_time) {
            if let EffectEvent::Disposed(id) = event {
                if self.focus.state().target() == Some(id) {
                    log::warn!("Focused object {:?} was destroyed", id);
                }
            }
            events.push(SessionEvent::Effect(event));
        }
        events
    }

    fn push_focus(&mut self, events: &mut Vec<SessionEvent>, id: ObjectId) {
        let Some(position) = self.scene.position(id) else {
            return;
        };
        let change = self.focus.request_focus(id, &position, &mut self.camera);
        self.apply_focus_change(events, change);
    }

    fn push_overview(&mut self, events: &mut Vec<SessionEvent>) {
        let change = self.focus.request_overview(&mut self.camera);
        self.apply_focus_change(events, change);
    }

    /// Leaving a close-up also drops the selection and its outline
    fn apply_focus_change(&mut self, events: &mut Vec<SessionEvent>, change: FocusChange) {
        match change {
            FocusChange::Unchanged => return,
            FocusChange::Returning => self.selection.clear(&mut self.scene),
            FocusChange::Focusing(_) => {}
        }
        self.sync_behavior();
        events.push(SessionEvent::Focus(change));
    }

    fn fire_at(&mut self, events: &mut Vec<SessionEvent>, victim: ObjectId) {
        let Some(attacker) = self.selection.current(&self.scene) else {
            log::debug!("Right pick without a selection, no missile");
            return;
        };
        if let Some(effect) = self.effects.launch_missile(&mut self.scene, attacker, victim) {
            events.push(SessionEvent::MissileLaunched { effect, attacker, victim });
        }
    }

    fn sync_behavior(&mut self) {
        self.keyboard.set_behavior(self.focus.input_behavior());
    }
}
