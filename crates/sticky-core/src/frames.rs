#![forbid(unsafe_code)]

//! Sorted snapshot of every tracked rectangle.
//!
//! # Invariants
//!
//! 1. Entries are sorted ascending by `top` using [`f64::total_cmp`], so
//!    non-finite values never break the sort.
//! 2. Ties on `top` are broken by [`ElementId`], which registries allocate in
//!    mount order.
//! 3. Each id appears at most once.
//! 4. A collection is immutable once built. Cloning shares the entry buffer,
//!    so every subscriber of a broadcast sees the same snapshot.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::rc::Rc;

use crate::element::ElementId;
use crate::geometry::FrameRect;

/// One element's latest rectangle inside a [`FrameCollection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEntry {
    /// Owning element.
    pub id: ElementId,
    /// Latest reported rectangle.
    pub rect: FrameRect,
}

impl FrameEntry {
    /// Create a new entry.
    #[inline]
    #[must_use]
    pub const fn new(id: ElementId, rect: FrameRect) -> Self {
        Self { id, rect }
    }

    fn sort_key_cmp(&self, other: &Self) -> Ordering {
        self.rect
            .top
            .total_cmp(&other.rect.top)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Immutable, sorted collection of tracked rectangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameCollection {
    entries: Rc<[FrameEntry]>,
}

impl FrameCollection {
    /// An empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a collection from entries in any order.
    ///
    /// If an id appears more than once, the last occurrence wins.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = FrameEntry>) -> Self {
        let mut entries: Vec<FrameEntry> = entries.into_iter().collect();
        // Walk backwards so the last occurrence of each id is the one kept.
        let mut seen = HashSet::with_capacity(entries.len());
        let mut kept: Vec<FrameEntry> = Vec::with_capacity(entries.len());
        while let Some(entry) = entries.pop() {
            if seen.insert(entry.id) {
                kept.push(entry);
            }
        }
        kept.sort_by(FrameEntry::sort_key_cmp);
        Self {
            entries: kept.into(),
        }
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending `top` order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FrameEntry] {
        &self.entries
    }

    /// Iterate entries in ascending `top` order.
    pub fn iter(&self) -> std::slice::Iter<'_, FrameEntry> {
        self.entries.iter()
    }

    /// Iterate rectangles in ascending `top` order.
    pub fn rects(&self) -> impl Iterator<Item = FrameRect> + '_ {
        self.entries.iter().map(|e| e.rect)
    }

    /// Natural rank of `id` (its index in ascending `top` order).
    #[must_use]
    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Latest rectangle reported for `id`.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<FrameRect> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.rect)
    }

    /// Check if `id` is present.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.position(id).is_some()
    }

    /// True when both collections share the same entry buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'a> IntoIterator for &'a FrameCollection {
    type Item = &'a FrameEntry;
    type IntoIter = std::slice::Iter<'a, FrameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, top: f64, height: f64) -> FrameEntry {
        FrameEntry::new(ElementId::new(id), FrameRect::new(top, height))
    }

    #[test]
    fn sorts_by_top() {
        let c = FrameCollection::from_entries([
            entry(1, 30.0, 10.0),
            entry(2, -10.0, 10.0),
            entry(3, 5.0, 10.0),
        ]);
        let tops: Vec<f64> = c.rects().map(|r| r.top).collect();
        assert_eq!(tops, vec![-10.0, 5.0, 30.0]);
    }

    #[test]
    fn ties_break_by_id() {
        let c = FrameCollection::from_entries([entry(9, 0.0, 1.0), entry(2, 0.0, 1.0)]);
        let ids: Vec<u64> = c.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn duplicate_id_keeps_last() {
        let c = FrameCollection::from_entries([entry(1, 0.0, 1.0), entry(1, 50.0, 2.0)]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(ElementId::new(1)), Some(FrameRect::new(50.0, 2.0)));
    }

    #[test]
    fn non_finite_tops_do_not_panic() {
        let c = FrameCollection::from_entries([
            entry(1, f64::NAN, 1.0),
            entry(2, f64::NEG_INFINITY, 1.0),
            entry(3, 0.0, 1.0),
            entry(4, f64::INFINITY, 1.0),
        ]);
        let ids: Vec<u64> = c.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn position_and_contains() {
        let c = FrameCollection::from_entries([entry(1, 10.0, 1.0), entry(2, 0.0, 1.0)]);
        assert_eq!(c.position(ElementId::new(1)), Some(1));
        assert_eq!(c.position(ElementId::new(2)), Some(0));
        assert!(!c.contains(ElementId::new(3)));
    }

    #[test]
    fn clone_shares_buffer() {
        let c = FrameCollection::from_entries([entry(1, 0.0, 1.0)]);
        let d = c.clone();
        assert!(c.ptr_eq(&d));
        assert_eq!(c, d);
    }

    #[test]
    fn equality_is_by_content() {
        let a = FrameCollection::from_entries([entry(1, 0.0, 1.0)]);
        let b = FrameCollection::from_entries([entry(1, 0.0, 1.0)]);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_collection() {
        let c = FrameCollection::empty();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert_eq!(c.rects().count(), 0);
    }
}
