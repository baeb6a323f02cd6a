// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Input: turn pointer and wheel events into camera changes.
//!
//! The host windowing layer feeds raw events into an [`InputController`], which
//! owns the *target* [`Camera`](corkboard_camera::Camera) and a small drag
//! state machine:
//!
//! ```text
//! Idle --(primary/middle down)--> Dragging --(up/leave/cancel)--> Idle
//! ```
//!
//! - [`drag`]: anchored drag tracking. Offsets are computed relative to the
//!   drag start, so dropped move events never accumulate drift.
//! - [`event`]: host-agnostic pointer and wheel event types.
//! - [`wheel`]: per-platform wheel zoom speed.
//!
//! Positions are in surface-relative screen pixels; hosts subtract the
//! surface's client origin before forwarding events.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use corkboard_camera::ZoomLimits;
//! use corkboard_input::event::{Buttons, PointerButton, PointerEvent, PointerId, WheelEvent};
//! use corkboard_input::wheel::WheelProfile;
//! use corkboard_input::InputController;
//!
//! let mut input = InputController::new(ZoomLimits::default(), WheelProfile::Other);
//! input.set_viewport(Size::new(1000.0, 800.0));
//!
//! let id = PointerId(1);
//! let down = input.on_pointer(&PointerEvent::down(id, PointerButton::Primary, Point::new(10.0, 10.0)));
//! assert_eq!(down.capture, Some(id));
//!
//! let moved = input.on_pointer(&PointerEvent::moved(id, Buttons::PRIMARY, Point::new(60.0, 30.0)));
//! assert_eq!(moved.camera.unwrap().offset(), Vec2::new(50.0, 20.0));
//!
//! // Plain wheel pans and asks the host to swallow the native scroll.
//! let wheel = input.on_wheel(&WheelEvent::new(Vec2::new(0.0, 40.0), Point::new(5.0, 5.0), false));
//! assert!(wheel.prevent_default);
//! ```

mod controller;
pub mod drag;
pub mod event;
pub mod wheel;

pub use controller::{InputController, InputResponse, InputState};
