// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_camera::Camera;
use hashbrown::HashMap;
use kurbo::{Rect, Size};

use super::{Scene, Surface};
use crate::card::CardId;
use crate::store::CardStore;

/// Formats a camera as a CSS transform, `translate(Xpx, Ypx) scale(k)`.
///
/// The plane's transform origin is assumed to be its top-left corner.
#[must_use]
pub fn css_transform(camera: &Camera) -> String {
    let offset = camera.offset();
    format!(
        "translate({}px, {}px) scale({})",
        offset.x,
        offset.y,
        camera.scale()
    )
}

/// Display state of a card element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    /// The element is rendered.
    Block,
    /// The element is mounted but hidden.
    #[default]
    None,
}

/// Retained state of one card element on the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneElement {
    /// World-space placement (`left`, `top`, `width`, `height`).
    pub bounds: Rect,
    /// Rendered title.
    pub title: String,
    /// Rendered content.
    pub content: String,
    /// Current display state.
    pub display: Display,
}

/// Retained-mode surface: one transformed plane holding every card element.
///
/// Elements start hidden; [`Surface::present`] flips only the ids listed in
/// the visibility diff.
#[derive(Clone, Debug, Default)]
pub struct PlaneSurface {
    transform: String,
    viewport: Size,
    elements: HashMap<CardId, PlaneElement>,
    synced_revision: Option<u64>,
    toggles: u64,
}

impl PlaneSurface {
    /// Creates an empty plane.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform currently applied to the plane.
    #[must_use]
    pub fn transform(&self) -> &str {
        &self.transform
    }

    /// Viewport size last applied.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Element for a card.
    #[must_use]
    pub fn element(&self, id: CardId) -> Option<&PlaneElement> {
        self.elements.get(&id)
    }

    /// Display state of a card, if it has an element.
    #[must_use]
    pub fn display(&self, id: CardId) -> Option<Display> {
        self.elements.get(&id).map(|e| e.display)
    }

    /// Number of mounted elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ids of the elements currently displayed.
    pub fn displayed(&self) -> impl Iterator<Item = CardId> + '_ {
        self.elements
            .iter()
            .filter(|(_, e)| e.display == Display::Block)
            .map(|(id, _)| *id)
    }

    /// Total number of display changes made so far.
    #[must_use]
    pub fn toggle_count(&self) -> u64 {
        self.toggles
    }

    fn set_display(&mut self, id: CardId, display: Display) {
        if let Some(element) = self.elements.get_mut(&id)
            && element.display != display
        {
            element.display = display;
            self.toggles += 1;
        }
    }
}

impl Surface for PlaneSurface {
    fn sync_cards(&mut self, cards: &CardStore) {
        if self.synced_revision == Some(cards.revision()) && self.elements.len() == cards.len() {
            return;
        }
        for card in cards.cards() {
            let element = self
                .elements
                .entry(card.id())
                .or_insert_with(|| PlaneElement {
                    bounds: card.bounds(),
                    title: String::new(),
                    content: String::new(),
                    display: Display::None,
                });
            if element.title != card.title {
                element.title.clone_from(&card.title);
            }
            if element.content != card.content {
                element.content.clone_from(&card.content);
            }
        }
        self.synced_revision = Some(cards.revision());
    }

    fn apply_camera(&mut self, camera: &Camera, viewport: Size) {
        self.transform = css_transform(camera);
        self.viewport = viewport;
    }

    fn present(&mut self, scene: &Scene<'_>) {
        for &id in &scene.diff.hidden {
            self.set_display(id, Display::None);
        }
        for &id in &scene.diff.shown {
            self.set_display(id, Display::Block);
        }
    }
}

#[cfg(test)]
mod tests {
    use corkboard_camera::Camera;
    use corkboard_cull::{VisibilityDiff, VisibilitySet};
    use kurbo::{Size, Vec2};

    use super::{Display, PlaneSurface, css_transform};
    use crate::card::CardMeta;
    use crate::store::{CardStore, GridFixture};
    use crate::surface::{Scene, Surface};

    fn store() -> CardStore {
        CardStore::fixture_grid(&GridFixture {
            count: 4,
            ..GridFixture::default()
        })
    }

    #[test]
    fn transform_string() {
        assert_eq!(css_transform(&Camera::IDENTITY), "translate(0px, 0px) scale(1)");
        let camera = Camera::new(Vec2::new(-12.5, 40.0), 1.5);
        assert_eq!(css_transform(&camera), "translate(-12.5px, 40px) scale(1.5)");
    }

    #[test]
    fn sync_mounts_hidden_elements_and_tracks_edits() {
        let mut cards = store();
        let mut plane = PlaneSurface::new();
        plane.sync_cards(&cards);
        assert_eq!(plane.len(), 4);
        let id = cards.cards()[0].id();
        assert_eq!(plane.display(id), Some(Display::None));
        assert_eq!(plane.element(id).map(|e| e.title.as_str()), Some("Card 1"));

        cards.update_card_meta(id, CardMeta::title("Edited")).unwrap();
        plane.sync_cards(&cards);
        assert_eq!(plane.element(id).map(|e| e.title.as_str()), Some("Edited"));
    }

    #[test]
    fn present_toggles_only_the_diff() {
        let cards = store();
        let mut plane = PlaneSurface::new();
        plane.sync_cards(&cards);
        let ids: Vec<_> = cards.cards().iter().map(|c| c.id()).collect();

        let visible: VisibilitySet<_> = [ids[0], ids[1]].into_iter().collect();
        let diff = visible.diff_from(&VisibilitySet::new());
        let viewport = Size::new(100.0, 100.0);
        plane.apply_camera(&Camera::IDENTITY, viewport);
        plane.present(&Scene {
            camera: Camera::IDENTITY,
            viewport,
            cards: &cards,
            visible: &visible,
            diff: &diff,
        });
        assert_eq!(plane.toggle_count(), 2);
        assert_eq!(plane.display(ids[1]), Some(Display::Block));

        let next: VisibilitySet<_> = [ids[1], ids[2]].into_iter().collect();
        let diff = next.diff_from(&visible);
        plane.present(&Scene {
            camera: Camera::IDENTITY,
            viewport,
            cards: &cards,
            visible: &next,
            diff: &diff,
        });
        assert_eq!(plane.toggle_count(), 4);
        assert_eq!(plane.display(ids[0]), Some(Display::None));
        assert_eq!(plane.display(ids[2]), Some(Display::Block));

        // An empty diff does no work.
        plane.present(&Scene {
            camera: Camera::IDENTITY,
            viewport,
            cards: &cards,
            visible: &next,
            diff: &VisibilityDiff::default(),
        });
        assert_eq!(plane.toggle_count(), 4);
    }
}
