#![forbid(unsafe_code)]

//! Publish/subscribe primitives for frame snapshots.
//!
//! - [`Broadcast`]: a shared, version-tracked latest value whose changes are
//!   pushed to subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per publish that changes the value.
//! 2. Publishing a value equal to the current one is a no-op.
//! 3. Subscribers are called in registration order, outside any borrow.
//! 4. A delivery superseded by a newer publish (from inside a callback) stops
//!    early; the newer delivery has already reached every subscriber.

pub mod broadcast;

pub use broadcast::{Broadcast, Subscription};
