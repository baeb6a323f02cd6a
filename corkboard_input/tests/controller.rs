// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `InputController`.
//!
//! These exercise the drag state machine, pointer filtering, and the two wheel
//! paths (pan and zoom toward the cursor).

use corkboard_camera::{Camera, ZoomLimits};
use corkboard_input::event::{
    Buttons, PointerButton, PointerEvent, PointerEventKind, PointerId, WheelEvent,
};
use corkboard_input::wheel::WheelProfile;
use corkboard_input::{InputController, InputResponse, InputState};
use kurbo::{Point, Size, Vec2};

const MOUSE: PointerId = PointerId(1);
const FINGER: PointerId = PointerId(2);

fn controller() -> InputController {
    let mut input = InputController::new(ZoomLimits::new(0.1, 3.0), WheelProfile::Other);
    input.set_viewport(Size::new(1000.0, 800.0));
    input
}

#[test]
fn primary_down_starts_drag_and_captures() {
    let mut input = controller();
    let response = input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Primary,
        Point::new(100.0, 100.0),
    ));
    assert_eq!(response.capture, Some(MOUSE));
    assert_eq!(response.camera, None);
    assert_eq!(input.state(), InputState::Dragging { pointer_id: MOUSE });
}

#[test]
fn middle_down_also_pans() {
    let mut input = controller();
    input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Auxiliary,
        Point::new(10.0, 10.0),
    ));
    let moved = input.on_pointer(&PointerEvent::moved(
        MOUSE,
        Buttons::AUXILIARY,
        Point::new(20.0, 40.0),
    ));
    assert_eq!(moved.camera.unwrap().offset(), Vec2::new(10.0, 30.0));
}

#[test]
fn secondary_down_is_ignored() {
    let mut input = controller();
    let response = input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Secondary,
        Point::new(10.0, 10.0),
    ));
    assert!(response.is_ignored());
    assert_eq!(input.state(), InputState::Idle);
}

#[test]
fn down_outside_surface_is_ignored() {
    let mut input = controller();
    let response = input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Primary,
        Point::new(1200.0, 10.0),
    ));
    assert!(response.is_ignored());
    assert_eq!(input.state(), InputState::Idle);
}

#[test]
fn drag_is_anchored_to_start_position() {
    let mut input = controller();
    input.set_target(Camera::new(Vec2::new(30.0, -20.0), 1.0));
    input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Primary,
        Point::new(100.0, 100.0),
    ));

    // Many intermediate moves were dropped by the host; only the last matters.
    let moved = input.on_pointer(&PointerEvent::moved(
        MOUSE,
        Buttons::PRIMARY,
        Point::new(175.0, 60.0),
    ));
    assert!(moved.snap);
    assert_eq!(moved.camera.unwrap().offset(), Vec2::new(105.0, -60.0));
    assert_eq!(input.target().offset(), Vec2::new(105.0, -60.0));

    let back = input.on_pointer(&PointerEvent::moved(
        MOUSE,
        Buttons::PRIMARY,
        Point::new(100.0, 100.0),
    ));
    assert_eq!(back.camera.unwrap().offset(), Vec2::new(30.0, -20.0));
}

#[test]
fn moves_from_other_pointers_are_filtered() {
    let mut input = controller();
    input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Primary,
        Point::new(0.0, 0.0),
    ));
    let foreign = input.on_pointer(&PointerEvent::moved(
        FINGER,
        Buttons::PRIMARY,
        Point::new(500.0, 500.0),
    ));
    assert!(foreign.is_ignored());
    assert_eq!(input.target(), Camera::IDENTITY);

    // A second down while dragging does not steal the drag.
    let second = input.on_pointer(&PointerEvent::down(
        FINGER,
        PointerButton::Primary,
        Point::new(5.0, 5.0),
    ));
    assert!(second.is_ignored());
    assert_eq!(input.state(), InputState::Dragging { pointer_id: MOUSE });
}

#[test]
fn move_without_pan_buttons_does_nothing() {
    let mut input = controller();
    input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Primary,
        Point::new(0.0, 0.0),
    ));
    let hover = input.on_pointer(&PointerEvent::moved(
        MOUSE,
        Buttons::empty(),
        Point::new(40.0, 40.0),
    ));
    assert!(hover.is_ignored());
}

#[test]
fn up_leave_and_cancel_end_the_drag() {
    for kind in [
        PointerEventKind::Up,
        PointerEventKind::Leave,
        PointerEventKind::Cancel,
    ] {
        let mut input = controller();
        input.on_pointer(&PointerEvent::down(
            MOUSE,
            PointerButton::Primary,
            Point::new(0.0, 0.0),
        ));

        // The wrong pointer ending does not release the captured one.
        let stale = input.on_pointer(&PointerEvent::ended(FINGER, kind, Point::ORIGIN));
        assert!(stale.is_ignored());

        let end = input.on_pointer(&PointerEvent::ended(MOUSE, kind, Point::ORIGIN));
        assert_eq!(end.release, Some(MOUSE));
        assert_eq!(input.state(), InputState::Idle);

        // After the drag ended moves are ignored.
        let after = input.on_pointer(&PointerEvent::moved(
            MOUSE,
            Buttons::PRIMARY,
            Point::new(90.0, 90.0),
        ));
        assert!(after.is_ignored());
    }
}

#[test]
fn plain_wheel_pans_by_negated_delta() {
    let mut input = controller();
    let response = input.on_wheel(&WheelEvent::new(
        Vec2::new(12.0, 40.0),
        Point::new(500.0, 400.0),
        false,
    ));
    assert!(response.prevent_default);
    assert!(!response.snap);
    assert_eq!(response.camera.unwrap().offset(), Vec2::new(-12.0, -40.0));
    assert_eq!(response.camera.unwrap().scale(), 1.0);
}

#[test]
fn ctrl_wheel_zooms_toward_cursor() {
    let mut input = controller();
    let cursor = Point::new(250.0, 300.0);
    let before = input.target().screen_to_world(cursor);

    let response = input.on_wheel(&WheelEvent::new(Vec2::new(0.0, -50.0), cursor, true));
    let camera = response.camera.unwrap();

    let expected_scale = (50.0_f64 * 0.015).exp();
    assert!((camera.scale() - expected_scale).abs() < 1e-12);
    let after = camera.screen_to_world(cursor);
    assert!((after.x - before.x).abs() < 1e-9);
    assert!((after.y - before.y).abs() < 1e-9);
}

#[test]
fn ctrl_wheel_respects_zoom_limits() {
    let mut input = controller();
    let cursor = Point::new(10.0, 10.0);
    for _ in 0..50 {
        input.on_wheel(&WheelEvent::new(Vec2::new(0.0, 500.0), cursor, true));
        assert!(input.target().scale() >= 0.1);
    }
    assert_eq!(input.target().scale(), 0.1);
    for _ in 0..50 {
        input.on_wheel(&WheelEvent::new(Vec2::new(0.0, -500.0), cursor, true));
        assert!(input.target().scale() <= 3.0);
    }
    assert_eq!(input.target().scale(), 3.0);
}

#[test]
fn consecutive_wheel_zooms_compose_on_target() {
    let mut input = controller();
    let cursor = Point::new(400.0, 400.0);
    input.on_wheel(&WheelEvent::new(Vec2::new(0.0, -20.0), cursor, true));
    input.on_wheel(&WheelEvent::new(Vec2::new(0.0, -20.0), cursor, true));
    let expected = (40.0_f64 * 0.015).exp();
    assert!((input.target().scale() - expected).abs() < 1e-12);
}

#[test]
fn wheel_pan_during_drag_is_not_lost() {
    let mut input = controller();
    input.on_pointer(&PointerEvent::down(
        MOUSE,
        PointerButton::Primary,
        Point::new(0.0, 0.0),
    ));
    input.on_wheel(&WheelEvent::new(Vec2::new(0.0, 100.0), Point::ORIGIN, false));
    let moved = input.on_pointer(&PointerEvent::moved(
        MOUSE,
        Buttons::PRIMARY,
        Point::new(10.0, 0.0),
    ));
    assert_eq!(moved.camera.unwrap().offset(), Vec2::new(10.0, -100.0));
}

#[test]
fn resize_reports_changes_only() {
    let mut input = controller();
    assert!(!input.set_viewport(Size::new(1000.0, 800.0)));
    assert!(input.set_viewport(Size::new(640.0, 480.0)));
    assert_eq!(input.viewport(), Size::new(640.0, 480.0));
}

#[test]
fn set_limits_reclamps_target() {
    let mut input = controller();
    input.set_target(Camera::new(Vec2::ZERO, 2.5));
    input.set_limits(ZoomLimits::new(0.25, 2.0));
    assert_eq!(input.target().scale(), 2.0);
    assert_eq!(InputResponse::default().camera, None);
}
