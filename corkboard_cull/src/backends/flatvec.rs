// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense rectangle list scanned in full on every query.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::backend::Backend;
use crate::rect::overlaps;

/// Linear-scan backend. O(N) per query.
#[derive(Clone, Debug, Default)]
pub struct FlatVec {
    rects: Vec<Rect>,
}

impl Backend for FlatVec {
    fn push(&mut self, rect: Rect) -> usize {
        self.rects.push(rect);
        self.rects.len() - 1
    }

    fn clear(&mut self) {
        self.rects.clear();
    }

    fn len(&self) -> usize {
        self.rects.len()
    }

    fn visit_rect<F: FnMut(usize)>(&self, region: Rect, mut f: F) {
        self.rects
            .iter()
            .enumerate()
            .filter(|(_, rect)| overlaps(rect, &region))
            .for_each(|(slot, _)| f(slot));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::FlatVec;
    use crate::backend::Backend;

    fn hits(backend: &FlatVec, region: Rect) -> Vec<usize> {
        let mut out = Vec::new();
        backend.visit_rect(region, |slot| out.push(slot));
        out
    }

    #[test]
    fn slots_follow_push_order() {
        let mut backend = FlatVec::default();
        assert_eq!(backend.push(Rect::new(0.0, 0.0, 10.0, 10.0)), 0);
        assert_eq!(backend.push(Rect::new(50.0, 50.0, 60.0, 60.0)), 1);
        assert_eq!(backend.len(), 2);

        assert_eq!(hits(&backend, Rect::new(5.0, 5.0, 55.0, 55.0)), vec![0, 1]);
        assert!(hits(&backend, Rect::new(20.0, 20.0, 30.0, 30.0)).is_empty());
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let mut backend = FlatVec::default();
        backend.push(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(hits(&backend, Rect::new(10.0, 0.0, 20.0, 10.0)).is_empty());
    }

    #[test]
    fn clear_restarts_slots() {
        let mut backend = FlatVec::default();
        backend.push(Rect::new(0.0, 0.0, 1.0, 1.0));
        backend.push(Rect::new(2.0, 2.0, 3.0, 3.0));
        backend.clear();
        assert!(backend.is_empty());
        assert_eq!(backend.push(Rect::new(2.0, 2.0, 3.0, 3.0)), 0);
    }
}
