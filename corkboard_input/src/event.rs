// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic pointer and wheel events.

use bitflags::bitflags;
use kurbo::{Point, Vec2};

/// Identifier the host assigns to a pointer (mouse, pen, or touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Button whose state changed in a down/up event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button or a touch contact.
    Primary,
    /// Middle button or wheel press.
    Auxiliary,
    /// Secondary button, usually the right mouse button.
    Secondary,
    /// Browser "back" button.
    Back,
    /// Browser "forward" button.
    Forward,
}

impl PointerButton {
    /// Maps a DOM-style `button` index to a [`PointerButton`].
    #[must_use]
    pub fn from_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            3 => Some(Self::Back),
            4 => Some(Self::Forward),
            _ => None,
        }
    }

    /// Returns `true` for the buttons that start a pan: primary and middle.
    #[must_use]
    pub fn pans(self) -> bool {
        matches!(self, Self::Primary | Self::Auxiliary)
    }
}

bitflags! {
    /// Buttons held while an event fired, using the DOM `buttons` bit layout.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        /// Primary button.
        const PRIMARY = 1;
        /// Secondary button.
        const SECONDARY = 1 << 1;
        /// Middle button.
        const AUXILIARY = 1 << 2;
        /// Back button.
        const BACK = 1 << 3;
        /// Forward button.
        const FORWARD = 1 << 4;
    }
}

impl Buttons {
    /// Buttons that keep a pan drag alive.
    pub const PAN: Self = Self::PRIMARY.union(Self::AUXILIARY);
}

/// What happened to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A button was pressed.
    Down,
    /// The pointer moved.
    Move,
    /// A button was released.
    Up,
    /// The pointer left the surface.
    Leave,
    /// The host cancelled the pointer (for example a touch turned into a system gesture).
    Cancel,
}

/// A pointer event in surface-relative screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer this event belongs to.
    pub pointer_id: PointerId,
    /// Event kind.
    pub kind: PointerEventKind,
    /// Button that changed state, for down/up events.
    pub button: Option<PointerButton>,
    /// Buttons held when the event fired.
    pub buttons: Buttons,
    /// Pointer position relative to the surface origin.
    pub position: Point,
}

impl PointerEvent {
    /// A button press.
    #[must_use]
    pub fn down(pointer_id: PointerId, button: PointerButton, position: Point) -> Self {
        let buttons = match button {
            PointerButton::Primary => Buttons::PRIMARY,
            PointerButton::Auxiliary => Buttons::AUXILIARY,
            PointerButton::Secondary => Buttons::SECONDARY,
            PointerButton::Back => Buttons::BACK,
            PointerButton::Forward => Buttons::FORWARD,
        };
        Self {
            pointer_id,
            kind: PointerEventKind::Down,
            button: Some(button),
            buttons,
            position,
        }
    }

    /// A move with the given buttons held.
    #[must_use]
    pub fn moved(pointer_id: PointerId, buttons: Buttons, position: Point) -> Self {
        Self {
            pointer_id,
            kind: PointerEventKind::Move,
            button: None,
            buttons,
            position,
        }
    }

    /// A button release.
    #[must_use]
    pub fn up(pointer_id: PointerId, button: PointerButton, position: Point) -> Self {
        Self {
            pointer_id,
            kind: PointerEventKind::Up,
            button: Some(button),
            buttons: Buttons::empty(),
            position,
        }
    }

    /// A leave or cancel event.
    #[must_use]
    pub fn ended(pointer_id: PointerId, kind: PointerEventKind, position: Point) -> Self {
        Self {
            pointer_id,
            kind,
            button: None,
            buttons: Buttons::empty(),
            position,
        }
    }
}

/// A wheel or trackpad scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Scroll delta in pixels (`deltaX`, `deltaY`).
    pub delta: Vec2,
    /// Cursor position relative to the surface origin.
    pub position: Point,
    /// `true` while the platform zoom modifier (Ctrl) is held. Trackpad
    /// pinch gestures are reported this way by most hosts.
    pub ctrl: bool,
}

impl WheelEvent {
    /// Creates a wheel event.
    #[must_use]
    pub fn new(delta: Vec2, position: Point, ctrl: bool) -> Self {
        Self {
            delta,
            position,
            ctrl,
        }
    }
}
