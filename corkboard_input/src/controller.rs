// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_camera::{Camera, ZoomLimits};
use kurbo::{Rect, Size};

use crate::drag::DragState;
use crate::event::{Buttons, PointerEvent, PointerEventKind, PointerId, WheelEvent};
use crate::wheel::WheelProfile;

/// Drag state machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputState {
    /// No drag in progress.
    Idle,
    /// A pan drag owned by `pointer_id`.
    Dragging {
        /// Captured pointer.
        pointer_id: PointerId,
    },
}

/// What the host and the scheduler should do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputResponse {
    /// New target camera, if the event changed it.
    pub camera: Option<Camera>,
    /// Drag moves follow the pointer 1:1; an easing scheduler should jump
    /// its live camera to `camera` instead of animating toward it.
    pub snap: bool,
    /// Pointer the host should capture.
    pub capture: Option<PointerId>,
    /// Pointer the host should release.
    pub release: Option<PointerId>,
    /// The host should suppress its native handling (scrolling, page zoom).
    pub prevent_default: bool,
}

impl InputResponse {
    /// Returns `true` if the event was filtered out entirely.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        *self == Self::default()
    }
}

/// Interprets pointer and wheel events into changes of a *target* camera.
///
/// The controller is the single writer of the target camera. Drags anchor to
/// the target offset at drag start; wheel zoom anchors on the target camera
/// too, so consecutive wheel ticks during an easing animation compose the way
/// the user scrolled them rather than snapping back toward the live camera.
#[derive(Clone, Debug)]
pub struct InputController {
    target: Camera,
    limits: ZoomLimits,
    wheel: WheelProfile,
    viewport: Size,
    drag: DragState,
}

impl InputController {
    /// Creates an idle controller with the identity camera.
    #[must_use]
    pub fn new(limits: ZoomLimits, wheel: WheelProfile) -> Self {
        Self {
            target: Camera::IDENTITY.clamped(limits),
            limits,
            wheel,
            viewport: Size::ZERO,
            drag: DragState::default(),
        }
    }

    /// Current target camera.
    #[must_use]
    pub fn target(&self) -> Camera {
        self.target
    }

    /// Replaces the target camera, clamping its scale.
    pub fn set_target(&mut self, camera: Camera) {
        self.target = camera.clamped(self.limits);
    }

    /// Zoom limits applied to every camera change.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and re-clamps the target camera.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.target = self.target.clamped(limits);
    }

    /// Wheel profile in use.
    #[must_use]
    pub fn wheel_profile(&self) -> WheelProfile {
        self.wheel
    }

    /// Current viewport size in screen pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Records a surface resize. Returns `true` if the size changed.
    pub fn set_viewport(&mut self, viewport: Size) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        true
    }

    /// Current phase of the drag state machine.
    #[must_use]
    pub fn state(&self) -> InputState {
        match self.drag.pointer() {
            Some(pointer_id) => InputState::Dragging { pointer_id },
            None => InputState::Idle,
        }
    }

    /// Handles a pointer event.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> InputResponse {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up | PointerEventKind::Leave | PointerEventKind::Cancel => {
                self.on_end(event)
            }
        }
    }

    /// Handles a wheel event.
    ///
    /// With the zoom modifier held the wheel zooms toward the cursor;
    /// otherwise it pans by the negated delta.
    pub fn on_wheel(&mut self, event: &WheelEvent) -> InputResponse {
        let before = self.target.offset();
        let camera = if event.ctrl {
            let factor = self.wheel.zoom_factor(event.delta.y);
            self.target.zoom_at(event.position, factor, self.limits)
        } else {
            self.target.pan_by(-event.delta)
        };
        self.target = camera;
        if let Some(anchor) = self.drag.anchor.as_mut() {
            // An in-flight drag keeps following the pointer from the moved camera.
            anchor.start_offset += camera.offset() - before;
        }
        InputResponse {
            camera: Some(camera),
            prevent_default: true,
            ..InputResponse::default()
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> InputResponse {
        let pans = event.button.is_some_and(|b| b.pans());
        if !pans || self.drag.is_dragging() || !self.within_surface(event) {
            return InputResponse::default();
        }
        self.drag
            .start(event.pointer_id, event.position, self.target.offset());
        InputResponse {
            capture: Some(event.pointer_id),
            ..InputResponse::default()
        }
    }

    fn on_move(&mut self, event: &PointerEvent) -> InputResponse {
        if !event.buttons.intersects(Buttons::PAN) {
            return InputResponse::default();
        }
        let Some(offset) = self.drag.offset_for(event.pointer_id, event.position) else {
            return InputResponse::default();
        };
        self.target = self.target.with_offset(offset);
        InputResponse {
            camera: Some(self.target),
            snap: true,
            ..InputResponse::default()
        }
    }

    fn on_end(&mut self, event: &PointerEvent) -> InputResponse {
        if self.drag.end(event.pointer_id) {
            InputResponse {
                release: Some(event.pointer_id),
                ..InputResponse::default()
            }
        } else {
            InputResponse::default()
        }
    }

    fn within_surface(&self, event: &PointerEvent) -> bool {
        // Before the first resize notification the surface size is unknown.
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return true;
        }
        Rect::from_origin_size((0.0, 0.0), self.viewport).contains(event.position)
    }
}
