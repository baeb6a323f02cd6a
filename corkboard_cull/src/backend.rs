// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for the spatial storage behind a [`Culler`](crate::Culler).

use kurbo::Rect;

/// Append-only spatial storage of world-space rectangles addressed by dense
/// slots.
///
/// Card geometry never changes once a card exists, so a backend only grows
/// or is rebuilt from scratch. It has to answer "which slots overlap this
/// rectangle"; [`FlatVec`](crate::FlatVec) does so with a linear scan. A
/// uniform grid or an R-tree can be plugged in here once boards grow past a
/// few thousand cards.
pub trait Backend {
    /// Appends a rectangle and returns its slot.
    ///
    /// Slots are assigned in order, starting at zero after a
    /// [`Backend::clear`].
    fn push(&mut self, rect: Rect) -> usize;

    /// Drops every slot.
    fn clear(&mut self);

    /// Number of slots.
    fn len(&self) -> usize;

    /// Returns `true` if there are no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit slots whose rectangle strictly overlaps `region`
    /// (see [`overlaps`](crate::overlaps)).
    fn visit_rect<F: FnMut(usize)>(&self, region: Rect, f: F);
}
