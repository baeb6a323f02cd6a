// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use corkboard_camera::Camera;
use kurbo::{Rect, Size};

use crate::backend::Backend;
use crate::backends::FlatVec;
use crate::rect::padded_world_rect;
use crate::set::{VisibilityDiff, VisibilitySet};

/// Default padding margin, in world units.
pub const DEFAULT_PADDING: f64 = 400.0;

/// Computes which keyed world rectangles intersect the padded viewport.
///
/// The culler owns the geometry (copied in via [`Culler::insert`] or
/// [`Culler::set_items`]) and remembers the last computed set so that
/// [`Culler::update`] can report only membership changes.
pub struct Culler<K, B = FlatVec> {
    keys: Vec<K>,
    backend: B,
    padding: f64,
    visible: VisibilitySet<K>,
}

impl<K: Copy + Eq + Hash> Culler<K> {
    /// Creates an empty culler over a [`FlatVec`] backend.
    #[must_use]
    pub fn new(padding: f64) -> Self {
        Self::with_backend(FlatVec::default(), padding)
    }
}

impl<K: Copy + Eq + Hash, B: Backend> Culler<K, B> {
    /// Creates an empty culler over the given backend.
    #[must_use]
    pub fn with_backend(mut backend: B, padding: f64) -> Self {
        backend.clear();
        Self {
            keys: Vec::new(),
            backend,
            padding,
            visible: VisibilitySet::new(),
        }
    }

    /// Padding added on every side of the visible world rectangle.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Sets the padding margin.
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
    }

    /// Number of tracked rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no rectangle is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Adds a keyed world rectangle.
    pub fn insert(&mut self, key: K, rect: Rect) {
        let slot = self.backend.push(rect);
        debug_assert_eq!(slot, self.keys.len(), "backend slots must stay dense");
        self.keys.push(key);
    }

    /// Replaces every tracked rectangle.
    ///
    /// The previous visibility set is kept, so the next [`Culler::update`]
    /// reports changes relative to what the host currently shows.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = (K, Rect)>) {
        self.keys.clear();
        self.backend.clear();
        for (key, rect) in items {
            self.insert(key, rect);
        }
    }

    /// Computes the visibility set for `camera` and `viewport` without
    /// touching the remembered set.
    ///
    /// A degenerate viewport yields an empty set.
    #[must_use]
    pub fn compute(&self, camera: &Camera, viewport: Size) -> VisibilitySet<K> {
        let Some(region) = padded_world_rect(camera, viewport, self.padding) else {
            return VisibilitySet::new();
        };
        let mut visible = VisibilitySet::with_capacity(self.keys.len().min(256));
        self.backend.visit_rect(region, |slot| {
            if let Some(key) = self.keys.get(slot) {
                visible.insert(*key);
            }
        });
        visible
    }

    /// Recomputes visibility and returns the changes since the previous call.
    pub fn update(&mut self, camera: &Camera, viewport: Size) -> VisibilityDiff<K> {
        let next = self.compute(camera, viewport);
        self.replace_visible(next)
    }

    /// Installs an externally computed set (for example one delivered by the
    /// background worker) and returns the changes against the previous one.
    pub fn replace_visible(&mut self, next: VisibilitySet<K>) -> VisibilityDiff<K> {
        let diff = next.diff_from(&self.visible);
        self.visible = next;
        diff
    }

    /// The set produced by the most recent [`Culler::update`].
    #[must_use]
    pub fn visible(&self) -> &VisibilitySet<K> {
        &self.visible
    }
}

impl<K: fmt::Debug, B: fmt::Debug> fmt::Debug for Culler<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Culler")
            .field("items", &self.keys.len())
            .field("backend", &self.backend)
            .field("padding", &self.padding)
            .field("visible", &self.visible)
            .finish()
    }
}
