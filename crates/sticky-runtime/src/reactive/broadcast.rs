#![forbid(unsafe_code)]

//! Latest-value broadcast with change notification and version tracking.
//!
//! # Design
//!
//! [`Broadcast<T>`] keeps the most recently published `T` in shared,
//! reference-counted storage (`Rc<RefCell<..>>`). Publishing a value that
//! differs (by `PartialEq`) bumps the version and hands a clone of the new
//! value to each live subscriber in registration order. Cheap-to-clone
//! payloads (such as an `Rc`-backed snapshot) keep delivery O(S).
//!
//! # Performance
//!
//! | Operation     | Complexity                 |
//! |---------------|----------------------------|
//! | `latest()`    | O(clone of T)              |
//! | `publish()`   | O(S) where S = subscribers |
//! | `subscribe()` | O(1) amortized             |
//!
//! # Failure Modes
//!
//! - **Publish from a callback**: allowed. The nested publish delivers the
//!   newer value to everyone, and the outer delivery stops as soon as it
//!   notices the version moved on, so no subscriber is left holding the
//!   older value.
//! - **Subscriber leak**: callbacks live as long as their [`Subscription`]
//!   guard. Dead entries are pruned lazily on the next publish.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct BroadcastInner<T> {
    value: T,
    version: u64,
    /// Weak handles; the strong side lives in each `Subscription`.
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared latest value that notifies subscribers when it changes.
///
/// Cloning a `Broadcast` creates a new handle to the **same** channel.
pub struct Broadcast<T> {
    inner: Rc<RefCell<BroadcastInner<T>>>,
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Broadcast")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Broadcast<T> {
    /// Create a channel holding `value` at version 0.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BroadcastInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the most recently published value.
    #[must_use]
    pub fn latest(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the most recently published value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Publish a new value.
    ///
    /// Returns `true` when the value changed and subscribers were notified,
    /// `false` when it equalled the current value.
    pub fn publish(&self, value: T) -> bool {
        let version = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;
            inner.version
        };
        self.deliver(version);
        true
    }

    /// Register a callback invoked with each newly published value.
    ///
    /// The callback stays registered until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Number of value-changing publishes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered subscribers, including dropped ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Subscribers whose guard is still alive.
    #[must_use]
    pub fn live_subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    fn deliver(&self, version: u64) {
        let (callbacks, value): (Vec<CallbackRc<T>>, T) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let live = inner.subscribers.iter().filter_map(|w| w.upgrade()).collect();
            (live, inner.value.clone())
        };

        for cb in &callbacks {
            if self.inner.borrow().version != version {
                // Superseded by a publish made from an earlier callback.
                return;
            }
            cb(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the guard drops the only strong reference to the callback, so the
/// channel's weak handle stops upgrading and the callback is never called
/// again.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
