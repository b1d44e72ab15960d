#![forbid(unsafe_code)]

//! Writing sweep results.
//!
//! `--ascii` prints one viewport snapshot per frame to stdout. `--jsonl=PATH`
//! writes one JSON line per frame to PATH, or stdout for `-`. With neither
//! flag, JSONL goes to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use sticky_harness::{FrameRecord, ascii_snapshot, write_jsonl};
use tracing::debug;

use crate::cli::Opts;

/// Write `frames` according to the output flags in `opts`.
pub fn emit<W: Write>(opts: &Opts, frames: &[FrameRecord], mut stdout: W) -> io::Result<()> {
    if opts.ascii {
        for frame in frames {
            writeln!(stdout, "--- scroll {} ---", frame.scroll)?;
            stdout.write_all(ascii_snapshot(frame, opts.viewport, opts.row_height).as_bytes())?;
        }
        stdout.flush()?;
    }

    match opts.jsonl.as_deref() {
        Some("-") => write_jsonl(&mut stdout, frames),
        Some(path) => {
            debug!(path, frames = frames.len(), "writing jsonl");
            write_jsonl(BufWriter::new(File::create(path)?), frames)
        }
        None if !opts.ascii => write_jsonl(&mut stdout, frames),
        None => Ok(()),
    }
}
