// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size};
use uuid::Uuid;

/// Stable, unique identifier of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(Uuid);

impl CardId {
    /// Generates a fresh random (v4) id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A card placed on the board.
///
/// Position and size are fixed at creation; only the title and content can
/// change afterwards (see [`CardMeta`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    id: CardId,
    /// Heading shown at the top of the card.
    pub title: String,
    /// Body text (markdown).
    pub content: String,
    position: Point,
    size: Size,
}

impl Card {
    /// Creates a card with a fresh id.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        position: Point,
        size: Size,
    ) -> Self {
        Self::with_id(CardId::new_v4(), title, content, position, size)
    }

    /// Creates a card with a caller-chosen id.
    #[must_use]
    pub fn with_id(
        id: CardId,
        title: impl Into<String>,
        content: impl Into<String>,
        position: Point,
        size: Size,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            position,
            size,
        }
    }

    /// The card's id.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Top-left corner in world space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size in world units.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// World-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Applies a metadata patch. Returns `true` if anything changed.
    pub fn apply(&mut self, meta: CardMeta) -> bool {
        let mut changed = false;
        if let Some(title) = meta.title
            && title != self.title
        {
            self.title = title;
            changed = true;
        }
        if let Some(content) = meta.content
            && content != self.content
        {
            self.content = content;
            changed = true;
        }
        changed
    }
}

/// Partial update of a card's title and content.
///
/// `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardMeta {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
}

impl CardMeta {
    /// A patch that replaces only the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// A patch that replaces only the content.
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
