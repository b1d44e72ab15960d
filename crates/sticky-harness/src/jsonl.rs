#![forbid(unsafe_code)]

//! JSONL output for frame records.
//!
//! One [`FrameRecord`] per line, so sweeps can be diffed, grepped, or
//! replayed by external tooling.

use std::io::{self, Write};

use crate::simulation::FrameRecord;

/// Serialize one record as a single JSON line (without the newline).
pub fn to_jsonl_line(record: &FrameRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Write every record as one JSON line.
pub fn write_jsonl<'a, W: Write>(
    mut out: W,
    records: impl IntoIterator<Item = &'a FrameRecord>,
) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
