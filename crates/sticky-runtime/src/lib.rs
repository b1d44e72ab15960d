#![forbid(unsafe_code)]

//! Runtime: frame aggregation and per-header reactive state.
//!
//! # Role in the sticky stack
//! `sticky-runtime` sits between the layout engine that measures headers and
//! the renderer that shifts them. Headers report rectangles as they are laid
//! out; the [`FrameRegistry`] merges them into one sorted
//! [`FrameCollection`](sticky_core::FrameCollection) and broadcasts it; each
//! [`TrackedElement`] keeps the latest broadcast and computes its own
//! [`Placement`](sticky_layout::Placement) on demand.
//!
//! # Threading
//! Everything here is single-threaded (`Rc<RefCell<..>>`) and synchronous.
//! Reports, rebuilds, and broadcasts all run on the caller's thread.

pub mod reactive;
pub mod registry;
pub mod tracked;

pub use reactive::{Broadcast, Subscription};
pub use registry::FrameRegistry;
pub use tracked::TrackedElement;
