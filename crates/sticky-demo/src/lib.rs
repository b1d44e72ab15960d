#![forbid(unsafe_code)]

//! Scroll sweep demo for sticky section headers.
//!
//! The binary lays out the reference screen (or a custom one from flags),
//! sweeps it from top to bottom, and prints each frame as JSONL or as an
//! ASCII viewport.

pub mod cli;
pub mod output;
