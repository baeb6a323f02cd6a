// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering surfaces a [`Board`](crate::Board) paints into.
//!
//! Two strategies are provided:
//!
//! - [`PlaneSurface`]: a retained plane of absolutely positioned card
//!   elements under a single transform. Painting sets the transform and
//!   toggles only the cards whose visibility changed.
//! - [`CanvasSurface`]: an immediate-mode 2D surface that is cleared and
//!   redrawn every paint, recorded as a list of [`DrawCommand`]s.
//!
//! Every paint calls [`Surface::apply_camera`] first and
//! [`Surface::present`] after visibility has been recomputed.

use corkboard_camera::Camera;
use corkboard_cull::{VisibilityDiff, VisibilitySet};
use kurbo::Size;

use crate::card::CardId;
use crate::store::CardStore;

mod canvas;
mod plane;

pub use canvas::{CanvasSurface, CardLayout, DrawCommand};
pub use plane::{Display, PlaneElement, PlaneSurface, css_transform};

/// What a surface needs to present one frame.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Camera painted this frame.
    pub camera: Camera,
    /// Viewport size in screen pixels.
    pub viewport: Size,
    /// Card store.
    pub cards: &'a CardStore,
    /// Cards currently visible.
    pub visible: &'a VisibilitySet<CardId>,
    /// Changes against the previously presented set.
    pub diff: &'a VisibilityDiff<CardId>,
}

/// A target the board paints into.
pub trait Surface {
    /// Brings per-card state in line with the store.
    ///
    /// Called on attach and after the store changes.
    fn sync_cards(&mut self, _cards: &CardStore) {}

    /// Applies the camera transform for the frame about to be presented.
    fn apply_camera(&mut self, camera: &Camera, viewport: Size);

    /// Presents the frame once visibility is known.
    fn present(&mut self, scene: &Scene<'_>);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn sync_cards(&mut self, cards: &CardStore) {
        (**self).sync_cards(cards);
    }

    fn apply_camera(&mut self, camera: &Camera, viewport: Size) {
        (**self).apply_camera(camera, viewport);
    }

    fn present(&mut self, scene: &Scene<'_>) {
        (**self).present(scene);
    }
}
