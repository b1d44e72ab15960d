#![forbid(unsafe_code)]

//! Sticky offset engine and paint ordering.
//!
//! Given one header's rectangle and the sorted collection of every tracked
//! rectangle, [`StickyEngine::place`] computes how far the rendering layer
//! must shift the header so it pins at the top of the viewport, and how far
//! the next header has pushed it out. The computation is a pure function of
//! the current geometry; nothing is cached between frames.
//!
//! # Example
//!
//! ```
//! use sticky_core::{ElementId, FrameCollection, FrameEntry, FrameRect};
//! use sticky_layout::{StackPriority, compute_offset};
//!
//! let a = FrameRect::new(-50.0, 40.0);
//! let b = FrameRect::new(10.0, 40.0);
//! let all = FrameCollection::from_entries([
//!     FrameEntry::new(ElementId::new(0), a),
//!     FrameEntry::new(ElementId::new(1), b),
//! ]);
//!
//! let placement = compute_offset(a, &all);
//! assert!(placement.sticking);
//! assert_eq!(placement.offset, 20.0);
//! assert_eq!(placement.priority(), StackPriority::Pinned);
//! assert_eq!(compute_offset(b, &all).offset, 0.0);
//! ```

pub mod offset;
pub mod stacking;

pub use offset::{Placement, StickyEngine, compute_offset};
pub use stacking::{StackKey, StackPriority, paint_order};
