// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored drag state: compute pan offsets relative to where a drag started.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the captured pointer, the
//!    pointer position and the camera offset at that moment.
//! 2) On each move, call [`DragState::offset_for`] to get the camera offset the
//!    drag implies. Moves from other pointers return `None`.
//! 3) End the drag with [`DragState::end`] when the captured pointer goes up,
//!    leaves or is cancelled.
//!
//! Offsets are always `start_offset + (current - start_pos)`. Summing per-event
//! deltas instead would drift whenever the host coalesces or drops moves from a
//! high-frequency pointing device.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use corkboard_input::drag::DragState;
//! use corkboard_input::event::PointerId;
//!
//! let mut drag = DragState::default();
//! drag.start(PointerId(7), Point::new(10.0, 20.0), Vec2::new(100.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! let offset = drag.offset_for(PointerId(7), Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(offset, Vec2::new(105.0, 5.0));
//!
//! // Another pointer is ignored.
//! assert!(drag.offset_for(PointerId(8), Point::new(0.0, 0.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

use crate::event::PointerId;

/// Where and how a drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer that owns the drag.
    pub pointer_id: PointerId,
    /// Pointer position at drag start.
    pub start_pos: Point,
    /// Camera offset at drag start.
    pub start_offset: Vec2,
}

/// Tracks an anchored pan drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Anchor of the active drag, if any.
    pub anchor: Option<DragAnchor>,
}

impl DragState {
    /// Start a new drag, replacing any active one.
    pub fn start(&mut self, pointer_id: PointerId, pos: Point, camera_offset: Vec2) {
        self.anchor = Some(DragAnchor {
            pointer_id,
            start_pos: pos,
            start_offset: camera_offset,
        });
    }

    /// Camera offset implied by `pointer_id` being at `pos`.
    ///
    /// Returns `None` when no drag is active or the pointer is not the
    /// captured one.
    pub fn offset_for(&self, pointer_id: PointerId, pos: Point) -> Option<Vec2> {
        self.total_offset(pointer_id, pos)
            .zip(self.anchor)
            .map(|(total, anchor)| anchor.start_offset + total)
    }

    /// Pointer movement since the drag started.
    pub fn total_offset(&self, pointer_id: PointerId, pos: Point) -> Option<Vec2> {
        match self.anchor {
            Some(anchor) if anchor.pointer_id == pointer_id => Some(pos - anchor.start_pos),
            _ => None,
        }
    }

    /// End the drag owned by `pointer_id`.
    ///
    /// Returns `true` if a drag was ended; events from other pointers leave
    /// the active drag alone.
    pub fn end(&mut self, pointer_id: PointerId) -> bool {
        if self.pointer() == Some(pointer_id) {
            self.anchor = None;
            true
        } else {
            false
        }
    }

    /// Pointer that owns the active drag.
    pub fn pointer(&self) -> Option<PointerId> {
        self.anchor.map(|a| a.pointer_id)
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
