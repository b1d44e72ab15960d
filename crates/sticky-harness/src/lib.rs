#![forbid(unsafe_code)]

//! Test harness and reference fixtures for sticky section headers.
//!
//! The harness stands in for a real scroll container: it lays out a
//! [`ContentModel`], mounts one [`TrackedElement`](sticky_runtime::TrackedElement)
//! per header, and replays scroll positions as frame observations. Each
//! simulated frame produces a serializable [`FrameRecord`] that tests can
//! assert on, print as JSONL, or render as an ASCII viewport.

pub mod content;
pub mod jsonl;
pub mod simulation;
pub mod snapshot;

pub use content::{ContentModel, Section};
pub use jsonl::{to_jsonl_line, write_jsonl};
pub use simulation::{FrameRecord, HeaderFrame, ScrollSimulation};
pub use snapshot::ascii_snapshot;
