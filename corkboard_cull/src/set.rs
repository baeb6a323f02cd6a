// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility sets and the diffs between them.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;
use hashbrown::hash_set;
use smallvec::SmallVec;

/// Set of keys whose rectangles intersect the padded viewport.
pub struct VisibilitySet<K> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> VisibilitySet<K> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    /// Creates an empty set with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` if `key` is visible.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Number of visible keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates visible keys in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, K> {
        self.keys.iter()
    }

    /// Marks `key` visible. Returns `true` if it was not already.
    pub fn insert(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<K: Eq + Hash + Copy> VisibilitySet<K> {
    /// Keys that entered and left visibility going from `previous` to `self`.
    #[must_use]
    pub fn diff_from(&self, previous: &Self) -> VisibilityDiff<K> {
        VisibilityDiff {
            shown: self.keys.difference(&previous.keys).copied().collect(),
            hidden: previous.keys.difference(&self.keys).copied().collect(),
        }
    }
}

impl<K: Eq + Hash> Default for VisibilitySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for VisibilitySet<K> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<K: Eq + Hash> PartialEq for VisibilitySet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Eq + Hash> Eq for VisibilitySet<K> {}

impl<K: fmt::Debug> fmt::Debug for VisibilitySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys.iter()).finish()
    }
}

impl<K: Eq + Hash> FromIterator<K> for VisibilitySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> Extend<K> for VisibilitySet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

impl<'a, K> IntoIterator for &'a VisibilitySet<K> {
    type Item = &'a K;
    type IntoIter = hash_set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<K> IntoIterator for VisibilitySet<K> {
    type Item = K;
    type IntoIter = hash_set::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

/// Membership changes between two visibility sets.
///
/// Hosts mount/show `shown` and unmount/hide `hidden`; everything else keeps
/// its current state. Order within each list is unspecified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityDiff<K> {
    /// Keys that became visible.
    pub shown: SmallVec<[K; 8]>,
    /// Keys that stopped being visible.
    pub hidden: SmallVec<[K; 8]>,
}

impl<K> VisibilityDiff<K> {
    /// Returns `true` if membership did not change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.hidden.is_empty()
    }

    /// Total number of membership changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shown.len() + self.hidden.len()
    }
}

impl<K> Default for VisibilityDiff<K> {
    fn default() -> Self {
        Self {
            shown: SmallVec::new(),
            hidden: SmallVec::new(),
        }
    }
}
