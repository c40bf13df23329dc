//! Focus state machine scenarios driven through the session

use rand::{rngs::StdRng, SeedableRng};

use crate::camera::{CameraPose, InputBehavior};
use crate::config::DemoConfig;
use crate::focus::{FocusChange, FocusState};
use crate::foundation::math::Vec3;
use crate::input::{KeyCode, KeyboardEvent, MouseButton, PointerEvent, PointerEventKind};
use crate::scene::ObjectId;
use crate::session::{BoardSession, SessionEvent};

const FRAME: f32 = 1.0 / 60.0;

fn session() -> BoardSession {
    let mut config = DemoConfig::default();
    config.board.piece_chance = 1.0;
    BoardSession::with_rng(config, StdRng::seed_from_u64(42))
}

fn double_tap(id: ObjectId) -> PointerEvent {
    PointerEvent::new(PointerEventKind::DoubleTap, 0.0, 0.0).with_picked(id)
}

fn left_pick(id: ObjectId) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Pick, 0.0, 0.0)
        .with_button(MouseButton::Left)
        .with_picked(id)
}

/// Tick until the camera settles; returns the number of frames that did not settle
fn settle(session: &mut BoardSession) -> usize {
    for frame in 0..2000 {
        let events = session.tick(FRAME);
        if events.iter().any(|e| matches!(e, SessionEvent::Settled(_))) {
            return frame;
        }
    }
    panic!("camera never settled");
}

fn right_pick(id: ObjectId) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Pick, 0.0, 0.0)
        .with_button(MouseButton::Right)
        .with_picked(id)
}

fn highlighted(session: &BoardSession, id: ObjectId) -> bool {
    session.scene().get(id).map_or(false, |object| object.highlighted)
}

fn key_up(session: &mut BoardSession, key: KeyCode) -> Vec<SessionEvent> {
    session.on_keyboard(KeyboardEvent::KeyDown(key));
    session.on_keyboard(KeyboardEvent::KeyUp(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_repeated_focus_request_is_idempotent() {
        let mut once = session();
        let mut twice = session();
        let piece = once.board().pieces[20];
        assert_eq!(twice.board().pieces[20], piece);

        once.on_pointer(double_tap(piece));
        twice.on_pointer(double_tap(piece));
        let goal = *twice.focus().goal().unwrap();

        // Second request arrives before any frame runs; pointer input is
        // ignored mid-move, so go through the controller directly.
        let mut focus = twice.focus().clone();
        let mut camera = twice.camera().clone();
        let position = twice.scene().position(piece).unwrap();
        assert_eq!(focus.request_focus(piece, &position, &mut camera), FocusChange::Unchanged);
        assert_eq!(focus.goal(), Some(&goal));

        settle(&mut once);
        settle(&mut twice);
        assert_eq!(once.camera().pose(), twice.camera().pose());
        assert_eq!(once.focus_state(), FocusState::Focused(piece));
    }

    #[test]
    fn test_repeat_select_while_transitioning_keeps_target() {
        let mut session = session();
        let piece = session.board().pieces[5];
        let position = session.scene().position(piece).unwrap();
        session.on_pointer(double_tap(piece));
        for _ in 0..30 {
            session.tick(FRAME);
        }

        let mut focus = session.focus().clone();
        let mut camera = session.camera().clone();
        let goal = *focus.goal().unwrap();
        assert_eq!(focus.request_focus(piece, &position, &mut camera), FocusChange::Unchanged);
        assert_eq!(focus.state(), FocusState::TransitioningToFocus(piece));
        assert_eq!(focus.goal(), Some(&goal));

        settle(&mut session);
        assert_eq!(session.camera().target, position);
    }

    #[test]
    fn test_focused_object_toggles_back_to_overview() {
        let mut session = session();
        let piece = session.board().pieces[12];
        session.on_pointer(double_tap(piece));
        settle(&mut session);
        assert_eq!(session.focus_state(), FocusState::Focused(piece));

        assert!(highlighted(&session, piece));

        let events = session.on_pointer(double_tap(piece));
        assert_eq!(events, vec![SessionEvent::Focus(FocusChange::Returning)]);
        assert_eq!(session.focus_state(), FocusState::TransitioningToOverview);
        assert_eq!(session.selected(), None);
        assert!(!highlighted(&session, piece));

        settle(&mut session);
        assert_eq!(session.focus_state(), FocusState::Overview);
        assert_eq!(session.keyboard().behavior(), InputBehavior::Pan);
        assert_eq!(session.camera().target, Vec3::new(17.5, 0.0, 17.5));
    }

    #[test]
    fn test_session_settles_on_the_pose_step_schedule() {
        let mut session = session();
        let piece = session.board().pieces[0];
        let mut replay = session.camera().pose();
        session.on_pointer(double_tap(piece));
        let goal = *session.focus().goal().unwrap();

        let config = &session.config().camera;
        let (factor, epsilon) = (config.lerp_factor, config.settle_epsilon);
        let mut expected = 0;
        while !replay.settle_step(&goal, factor, epsilon) {
            expected += 1;
        }
        assert!(expected > 0);
        assert_eq!(replay, goal);

        assert_eq!(settle(&mut session), expected);
        assert_eq!(session.camera().pose(), goal);
    }

    #[test]
    fn test_escape_returns_to_recorded_anchor() {
        let mut session = session();
        let pieces = session.board().pieces.clone();

        // Pan away from the board center first: right moves towards -x
        session.on_keyboard(KeyboardEvent::KeyDown(KeyCode::Right));
        for _ in 0..30 {
            session.tick(FRAME);
        }
        session.on_keyboard(KeyboardEvent::KeyUp(KeyCode::Right));
        let anchor = session.camera().target;
        assert_relative_eq!(anchor.x, 12.5, epsilon = 1e-3);

        session.on_pointer(double_tap(pieces[9]));
        settle(&mut session);
        session.on_pointer(left_pick(pieces[30]));
        assert_eq!(session.focus_state(), FocusState::TransitioningToFocus(pieces[30]));
        settle(&mut session);
        session.on_pointer(left_pick(pieces[63]));
        settle(&mut session);
        assert_eq!(session.focus_state(), FocusState::Focused(pieces[63]));
        assert_eq!(session.selected(), Some(pieces[63]));

        let events = key_up(&mut session, KeyCode::Escape);
        assert_eq!(events, vec![SessionEvent::Focus(FocusChange::Returning)]);
        assert_eq!(session.selected(), None);
        assert!(!highlighted(&session, pieces[63]));
        settle(&mut session);

        let target = session.camera().target;
        assert_eq!(target, Vec3::new(anchor.x, 0.0, anchor.z));
        let expected = CameraPose::overview(&anchor, &session.config().camera);
        assert_eq!(session.camera().pose(), expected);
    }

    #[test]
    fn test_select_other_while_focused_skips_overview() {
        let mut session = session();
        let first = session.board().pieces[1];
        let second = session.board().pieces[2];
        session.on_pointer(double_tap(first));
        settle(&mut session);

        let events = session.on_pointer(left_pick(second));
        assert_eq!(
            events,
            vec![
                SessionEvent::Selected(second),
                SessionEvent::Focus(FocusChange::Focusing(second))
            ]
        );
        assert_eq!(session.focus_state(), FocusState::TransitioningToFocus(second));
        assert_eq!(session.selected(), Some(second));
    }

    #[test]
    fn test_surface_click_while_focused_deselects() {
        let mut session = session();
        let piece = session.board().pieces[7];
        let surface = session.board().surface;
        session.on_pointer(double_tap(piece));
        settle(&mut session);

        let events = session.on_pointer(left_pick(surface));
        assert_eq!(events, vec![SessionEvent::Focus(FocusChange::Returning)]);
        assert_eq!(session.selected(), None);
        assert!(!highlighted(&session, piece));
        settle(&mut session);
        assert_eq!(session.focus_state(), FocusState::Overview);
    }

    #[test]
    fn test_right_pick_after_deselect_fires_nothing() {
        let mut session = session();
        let attacker = session.board().pieces[4];
        let victim = session.board().pieces[40];
        session.on_pointer(double_tap(attacker));
        settle(&mut session);
        key_up(&mut session, KeyCode::Space);
        settle(&mut session);
        assert_eq!(session.focus_state(), FocusState::Overview);

        assert!(session.on_pointer(right_pick(victim)).is_empty());
        assert_eq!(session.effects().active_count(), 0);
        assert!(session.scene().contains(victim));

        // A fresh selection arms firing again
        session.on_pointer(left_pick(attacker));
        let events = session.on_pointer(right_pick(victim));
        assert!(matches!(events.as_slice(), [SessionEvent::MissileLaunched { .. }]));
    }

    #[test]
    fn test_latest_focus_request_wins() {
        let mut session = session();
        let first = session.board().pieces[0];
        let second = session.board().pieces[63];
        session.on_pointer(double_tap(first));
        for _ in 0..20 {
            session.tick(FRAME);
        }

        let mut focus = session.focus().clone();
        let mut camera = session.camera().clone();
        let position = session.scene().position(second).unwrap();
        assert_eq!(focus.request_focus(second, &position, &mut camera), FocusChange::Focusing(second));
        assert_eq!(focus.state(), FocusState::TransitioningToFocus(second));
        assert_eq!(focus.goal().unwrap().target, position);
        assert_eq!(focus.overview_anchor(), Vec3::new(17.5, 0.0, 17.5));

        for _ in 0..2000 {
            if focus.tick(&mut camera).is_some() {
                break;
            }
        }
        assert_eq!(focus.state(), FocusState::Focused(second));
        assert_eq!(camera.target, position);
    }

    #[test]
    fn test_escape_ignored_outside_focused() {
        let mut session = session();
        assert!(key_up(&mut session, KeyCode::Escape).is_empty());

        let piece = session.board().pieces[3];
        session.on_pointer(double_tap(piece));
        assert!(key_up(&mut session, KeyCode::Space).is_empty());
        assert_eq!(session.focus_state(), FocusState::TransitioningToFocus(piece));
    }
}
