#![forbid(unsafe_code)]

//! Frame registry: the single writer of the global frame collection.
//!
//! # Design
//!
//! The registry owns a map from [`ElementId`] to that element's latest
//! [`FrameRect`]. Every mutation rebuilds the sorted [`FrameCollection`] from
//! the whole map (never patching the previous snapshot) and publishes it on a
//! [`Broadcast`]. The collection is therefore a pure function of the latest
//! rectangle per live element; the order in which elements report does not
//! matter.
//!
//! # Invariants
//!
//! 1. The published collection is sorted ascending by `top`.
//! 2. It holds exactly one entry per registered element, with the most
//!    recent rectangle reported for it.
//! 3. An unregistered element is absent from the very next snapshot.
//! 4. A report that leaves the collection unchanged publishes nothing.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use sticky_core::{ElementId, FrameCollection, FrameEntry, FrameRect};
use tracing::{debug, trace};

use crate::reactive::{Broadcast, Subscription};

#[derive(Debug, Default)]
struct RegistryState {
    rects: FxHashMap<ElementId, FrameRect>,
    next_id: u64,
}

/// Aggregates per-element rectangles into one sorted, broadcast collection.
///
/// Cloning a `FrameRegistry` creates a new handle to the **same** registry,
/// the way a scroll container hands itself to each of its headers.
#[derive(Clone)]
pub struct FrameRegistry {
    state: Rc<RefCell<RegistryState>>,
    frames: Broadcast<FrameCollection>,
}

impl std::fmt::Debug for FrameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRegistry")
            .field("len", &self.len())
            .field("version", &self.version())
            .field("subscriber_count", &self.frames.subscriber_count())
            .field("live_subscribers", &self.frames.live_subscriber_count())
            .finish()
    }
}

impl Default for FrameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(RegistryState::default())),
            frames: Broadcast::new(FrameCollection::empty()),
        }
    }

    /// Hand out a fresh id. Ids increase in allocation order.
    pub fn allocate_id(&self) -> ElementId {
        let mut state = self.state.borrow_mut();
        let id = ElementId::new(state.next_id);
        state.next_id += 1;
        id
    }

    /// Record `rect` as the latest rectangle for `id` and broadcast the
    /// rebuilt collection.
    ///
    /// Unknown ids are added. Returns `true` when a broadcast went out.
    pub fn report(&self, id: ElementId, rect: FrameRect) -> bool {
        trace!(element = %id, top = rect.top, height = rect.height, "frame reported");
        {
            let mut state = self.state.borrow_mut();
            state.next_id = state.next_id.max(id.get().saturating_add(1));
            if state.rects.insert(id, rect) == Some(rect) {
                return false;
            }
        }
        self.rebuild()
    }

    /// Drop `id` from the collection and broadcast the result.
    ///
    /// Unknown ids are a no-op. Returns `true` when a broadcast went out.
    pub fn unregister(&self, id: ElementId) -> bool {
        let removed = self.state.borrow_mut().rects.remove(&id).is_some();
        if !removed {
            return false;
        }
        trace!(element = %id, "element unregistered");
        self.rebuild()
    }

    /// Forget every element, as when the scroll container unmounts.
    pub fn clear(&self) -> bool {
        let had_entries = {
            let mut state = self.state.borrow_mut();
            let had = !state.rects.is_empty();
            state.rects.clear();
            had
        };
        debug!(had_entries, "frame registry cleared");
        had_entries && self.rebuild()
    }

    /// Register a callback invoked with every new collection.
    pub fn subscribe(&self, callback: impl Fn(&FrameCollection) + 'static) -> Subscription {
        self.frames.subscribe(callback)
    }

    /// The current collection.
    #[must_use]
    pub fn snapshot(&self) -> FrameCollection {
        self.frames.latest()
    }

    /// Check if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.state.borrow().rects.contains_key(&id)
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().rects.len()
    }

    /// Check if no elements are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of collections broadcast so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.frames.version()
    }

    fn rebuild(&self) -> bool {
        let collection = {
            let state = self.state.borrow();
            FrameCollection::from_entries(
                state
                    .rects
                    .iter()
                    .map(|(&id, &rect)| FrameEntry::new(id, rect)),
            )
        };
        let entries = collection.len();
        let published = self.frames.publish(collection);
        if published {
            debug!(version = self.frames.version(), entries, "frame collection broadcast");
        }
        published
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn tops(c: &FrameCollection) -> Vec<f64> {
        c.rects().map(|r| r.top).collect()
    }

    #[test]
    fn report_adds_and_sorts() {
        let reg = FrameRegistry::new();
        let a = reg.allocate_id();
        let b = reg.allocate_id();
        reg.report(a, FrameRect::new(100.0, 30.0));
        reg.report(b, FrameRect::new(-20.0, 30.0));
        assert_eq!(tops(&reg.snapshot()), vec![-20.0, 100.0]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn last_report_wins() {
        let reg = FrameRegistry::new();
        let a = reg.allocate_id();
        reg.report(a, FrameRect::new(10.0, 30.0));
        reg.report(a, FrameRect::new(-5.0, 30.0));
        let snap = reg.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get(a), Some(FrameRect::new(-5.0, 30.0)));
    }

    #[test]
    fn repeated_report_does_not_rebroadcast() {
        let reg = FrameRegistry::new();
        let a = reg.allocate_id();
        assert!(reg.report(a, FrameRect::new(10.0, 30.0)));
        let version = reg.version();
        let before = reg.snapshot();
        assert!(!reg.report(a, FrameRect::new(10.0, 30.0)));
        assert_eq!(reg.version(), version);
        assert_eq!(reg.snapshot(), before);
    }

    #[test]
    fn unregister_removes_entry() {
        let reg = FrameRegistry::new();
        let a = reg.allocate_id();
        let b = reg.allocate_id();
        reg.report(a, FrameRect::new(0.0, 10.0));
        reg.report(b, FrameRect::new(20.0, 10.0));
        assert!(reg.unregister(a));
        assert!(!reg.contains(a));
        assert!(!reg.snapshot().contains(a));
        assert!(reg.snapshot().contains(b));
    }

    #[test]
    fn unregister_unknown_is_a_no_op() {
        let reg = FrameRegistry::new();
        let version = reg.version();
        assert!(!reg.unregister(ElementId::new(99)));
        assert_eq!(reg.version(), version);
    }

    #[test]
    fn subscribers_receive_every_change() {
        let reg = FrameRegistry::new();
        let seen = Rc::new(Cell::new(0usize));
        let seen_clone = Rc::clone(&seen);
        let _sub = reg.subscribe(move |c| seen_clone.set(c.len()));

        let a = reg.allocate_id();
        let b = reg.allocate_id();
        reg.report(a, FrameRect::new(0.0, 10.0));
        assert_eq!(seen.get(), 1);
        reg.report(b, FrameRect::new(20.0, 10.0));
        assert_eq!(seen.get(), 2);
        reg.unregister(a);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn report_order_does_not_matter() {
        let rects = [
            (ElementId::new(0), FrameRect::new(30.0, 10.0)),
            (ElementId::new(1), FrameRect::new(-10.0, 10.0)),
            (ElementId::new(2), FrameRect::new(5.0, 10.0)),
        ];
        let forward = FrameRegistry::new();
        for (id, r) in rects {
            forward.report(id, r);
        }
        let backward = FrameRegistry::new();
        for (id, r) in rects.into_iter().rev() {
            backward.report(id, r);
        }
        assert_eq!(forward.snapshot(), backward.snapshot());
    }

    #[test]
    fn explicit_ids_do_not_collide_with_allocated_ones() {
        let reg = FrameRegistry::new();
        reg.report(ElementId::new(5), FrameRect::ZERO);
        assert_eq!(reg.allocate_id(), ElementId::new(6));
    }

    #[test]
    fn clear_resets_to_empty() {
        let reg = FrameRegistry::new();
        let a = reg.allocate_id();
        reg.report(a, FrameRect::new(0.0, 10.0));
        assert!(reg.clear());
        assert!(reg.is_empty());
        assert!(reg.snapshot().is_empty());
        assert!(!reg.clear());
    }

    #[test]
    fn clones_share_state() {
        let reg = FrameRegistry::new();
        let other = reg.clone();
        let a = reg.allocate_id();
        other.report(a, FrameRect::new(1.0, 2.0));
        assert!(reg.contains(a));
        assert_eq!(reg.version(), other.version());
    }

    #[test]
    fn debug_reports_live_subscribers() {
        let reg = FrameRegistry::new();
        let _keep = reg.subscribe(|_| {});
        let gone = reg.subscribe(|_| {});
        drop(gone);
        let dbg = format!("{reg:?}");
        assert!(dbg.contains("subscriber_count: 2"), "{dbg}");
        assert!(dbg.contains("live_subscribers: 1"), "{dbg}");
    }

    #[test]
    fn ties_are_deterministic() {
        let reg = FrameRegistry::new();
        let a = reg.allocate_id();
        let b = reg.allocate_id();
        reg.report(b, FrameRect::new(0.0, 10.0));
        reg.report(a, FrameRect::new(0.0, 10.0));
        let ids: Vec<ElementId> = reg.snapshot().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
