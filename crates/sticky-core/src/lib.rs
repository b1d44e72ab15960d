#![forbid(unsafe_code)]

//! Core: geometry, element identity, frame collections, and configuration.
//!
//! # Role in the sticky stack
//! `sticky-core` holds the plain data shared by every other crate. The offset
//! engine (`sticky-layout`) reads it, the registry (`sticky-runtime`) builds
//! it, and the harness serializes it.
//!
//! # Primary responsibilities
//! - **FrameRect**: a header's vertical extent in the scroll container's
//!   coordinate space (`top` decreases as content scrolls up).
//! - **ElementId**: stable identity of a tracked header.
//! - **FrameCollection**: immutable snapshot of every tracked rectangle,
//!   sorted ascending by `top`.
//! - **StickyConfig**: pinned edge and hand-off policy, loadable from the
//!   environment.

pub mod config;
pub mod element;
pub mod frames;
pub mod geometry;

pub use config::{ConfigError, HandoffPolicy, StickyConfig};
pub use element::ElementId;
pub use frames::{FrameCollection, FrameEntry};
pub use geometry::FrameRect;
