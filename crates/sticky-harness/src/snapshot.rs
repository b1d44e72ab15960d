#![forbid(unsafe_code)]

//! ASCII viewport snapshots.
//!
//! Each output line is one viewport row: its y coordinate, then the header
//! painted topmost at the row's midpoint (`*` marks a pinned header), or `.`
//! when only untracked content is visible there.
//!
//! ```text
//!     0 | Heading 0 *
//!    10 | Heading 0 *
//!    20 | Heading 1
//!    30 | .
//! ```

use std::fmt::Write;

use sticky_layout::StackPriority;

use crate::content::ContentModel;
use crate::simulation::FrameRecord;

/// Render the viewport `[0, viewport_height)` of `record` in rows of
/// `row_height`.
///
/// Returns an empty string for non-positive or non-finite dimensions.
#[must_use]
pub fn ascii_snapshot(record: &FrameRecord, viewport_height: f64, row_height: f64) -> String {
    let mut out = String::new();
    if !(viewport_height.is_finite() && row_height.is_finite())
        || viewport_height <= 0.0
        || row_height <= 0.0
    {
        return out;
    }

    let mut row = 0u32;
    loop {
        let y = row_height * f64::from(row);
        if y >= viewport_height {
            break;
        }
        let label = match record.header_at(y + row_height / 2.0) {
            Some(h) if h.priority == StackPriority::Pinned => {
                format!("{} *", ContentModel::label(h.index))
            }
            Some(h) => ContentModel::label(h.index),
            None => ".".to_string(),
        };
        let _ = writeln!(out, "{y:>5} | {label}");
        row += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScrollSimulation;

    #[test]
    fn renders_handoff_moment() {
        let mut sim = ScrollSimulation::new(ContentModel::uniform(0.0, 3, 40.0, 60.0));
        let frame = sim.scroll_to(80.0);
        let text = ascii_snapshot(&frame, 80.0, 10.0);
        let expected = "\
    0 | Heading 0 *
   10 | Heading 0 *
   20 | Heading 1
   30 | Heading 1
   40 | Heading 1
   50 | Heading 1
   60 | .
   70 | .
";
        assert_eq!(text, expected);
    }

    #[test]
    fn degenerate_dimensions_render_nothing() {
        let mut sim = ScrollSimulation::new(ContentModel::uniform(0.0, 1, 10.0, 10.0));
        let frame = sim.scroll_to(0.0);
        assert!(ascii_snapshot(&frame, 0.0, 10.0).is_empty());
        assert!(ascii_snapshot(&frame, 100.0, 0.0).is_empty());
        assert!(ascii_snapshot(&frame, f64::NAN, 10.0).is_empty());
    }
}
