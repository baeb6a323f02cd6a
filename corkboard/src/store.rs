// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};

use crate::card::{Card, CardId, CardMeta};

/// Error returned by [`CardStore`] mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A card with this id is already in the store.
    DuplicateCard(CardId),
    /// No card with this id exists.
    UnknownCard(CardId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCard(id) => write!(f, "card {id} already exists"),
            Self::UnknownCard(id) => write!(f, "no card with id {id}"),
        }
    }
}

impl core::error::Error for StoreError {}

/// Layout of a generated grid of cards.
///
/// Card `i` is placed at column `i % columns`, row `i / columns`, with its
/// top-left corner at `(column * spacing.x, row * spacing.y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridFixture {
    /// Number of cards.
    pub count: usize,
    /// Cards per row. Zero is treated as one.
    pub columns: usize,
    /// Distance between the origins of neighbouring cards.
    pub spacing: Vec2,
    /// Size of every card.
    pub size: Size,
}

impl GridFixture {
    /// World-space origin of card `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Point {
        let columns = self.columns.max(1);
        let column = index % columns;
        let row = index / columns;
        Point::new(
            column as f64 * self.spacing.x,
            row as f64 * self.spacing.y,
        )
    }
}

impl Default for GridFixture {
    fn default() -> Self {
        Self {
            count: 200,
            columns: 10,
            spacing: Vec2::new(320.0, 360.0),
            size: Size::new(300.0, 280.0),
        }
    }
}

/// Body of a generated card: a markdown sample exercising every block kind
/// the card renderer is expected to cope with.
fn fixture_content(number: usize) -> String {
    format!(
        "# Card {number}\n\
         \n\
         Intro paragraph with some **bold**, _italic_, and a [link](https://developer.mozilla.org).\n\
         \n\
         ## Details\n\
         - Bullet item one\n\
         - Bullet item two with `inline code`\n\
         1. Ordered item one\n\
         2. Ordered item two\n\
         \n\
         ### Tasks\n\
         - [x] Completed task\n\
         - [ ] Pending task\n\
         \n\
         > Blockquote: \"Simplicity is prerequisite for reliability.\" Dijkstra\n\
         \n\
         | Col | Value |\n\
         | --- | ----- |\n\
         | A   |  1    |\n\
         | B   |  2    |\n\
         \n\
         Third paragraph with a horizontal rule below.\n\
         \n\
         ---\n\
         \n\
         Final paragraph wrapping things up."
    )
}

/// Owns the cards on a board.
///
/// Cards keep their insertion order. Every successful mutation bumps
/// [`CardStore::revision`], which surfaces use to notice content changes.
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    index: HashMap<CardId, usize>,
    revision: u64,
}

impl CardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store filled with a generated grid of cards titled
    /// `Card 1`, `Card 2`, and so on.
    #[must_use]
    pub fn fixture_grid(fixture: &GridFixture) -> Self {
        let mut store = Self {
            cards: Vec::with_capacity(fixture.count),
            index: HashMap::with_capacity(fixture.count),
            revision: 0,
        };
        for i in 0..fixture.count {
            let number = i + 1;
            let card = Card::new(
                format!("Card {number}"),
                fixture_content(number),
                fixture.position(i),
                fixture.size,
            );
            store.index.insert(card.id(), store.cards.len());
            store.cards.push(card);
        }
        store
    }

    /// All cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks a card up by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).and_then(|&i| self.cards.get(i))
    }

    /// Returns `true` if the store holds a card with this id.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Counter bumped by every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Id and world bounds of every card, in insertion order.
    pub fn geometry(&self) -> impl Iterator<Item = (CardId, Rect)> + '_ {
        self.cards.iter().map(|card| (card.id(), card.bounds()))
    }

    /// Adds a card.
    pub fn add_card(&mut self, card: Card) -> Result<CardId, StoreError> {
        let id = card.id();
        if self.index.contains_key(&id) {
            return Err(StoreError::DuplicateCard(id));
        }
        self.index.insert(id, self.cards.len());
        self.cards.push(card);
        self.revision += 1;
        Ok(id)
    }

    /// Applies a title/content patch to a card.
    ///
    /// Returns `Ok(true)` if the card changed.
    pub fn update_card_meta(&mut self, id: CardId, meta: CardMeta) -> Result<bool, StoreError> {
        let card = self
            .index
            .get(&id)
            .and_then(|&i| self.cards.get_mut(i))
            .ok_or(StoreError::UnknownCard(id))?;
        let changed = card.apply(meta);
        if changed {
            self.revision += 1;
        }
        Ok(changed)
    }
}
