//! End-to-end checks on the reference screen: a banner and fifty headings.

use sticky_harness::{ContentModel, ScrollSimulation, ascii_snapshot, write_jsonl};

const VIEWPORT: f64 = 600.0;

fn natural_top(index: usize) -> f64 {
    ContentModel::REFERENCE_BANNER
        + (ContentModel::REFERENCE_HEADER + ContentModel::REFERENCE_BODY) * index as f64
}

#[test]
fn full_sweep_has_no_overlap() {
    let model = ContentModel::reference();
    let end = model.max_scroll(VIEWPORT);
    let mut sim = ScrollSimulation::new(model);
    let frames = sim.sweep(0.0, end, 17.0);
    assert!(frames.len() > 400);
    for frame in &frames {
        assert!(
            frame.overlapping_pairs(1e-6).is_empty(),
            "overlap at scroll {}",
            frame.scroll
        );
    }
}

#[test]
fn banner_scrolls_away_before_anything_sticks() {
    let mut sim = ScrollSimulation::new(ContentModel::reference());
    let frame = sim.scroll_to(ContentModel::REFERENCE_BANNER);
    assert_eq!(frame.sticking().count(), 0);
    assert_eq!(frame.header_at(0.0).map(|h| h.index), Some(0));
    assert_eq!(frame.header_at(0.0).map(|h| h.placement.offset), Some(0.0));

    let frame = sim.scroll_to(ContentModel::REFERENCE_BANNER + 1.0);
    assert_eq!(frame.sticking().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn heading_three_pins_then_yields_to_four() {
    let mut sim = ScrollSimulation::new(ContentModel::reference());

    let frame = sim.scroll_to(natural_top(3) + 10.0);
    let top = frame.header_at(0.0).expect("pinned edge covered");
    assert_eq!(top.index, 3);
    assert_eq!(top.rendered.top, 0.0);

    // Heading 4 is 20 units below the edge, 14 units inside heading 3.
    let frame = sim.scroll_to(natural_top(4) - 20.0);
    let h3 = frame.headers[3];
    assert_eq!(h3.rendered.top, -14.0);
    assert_eq!(h3.rendered.bottom(), 20.0);
    assert_eq!(frame.header_at(0.0).map(|h| h.index), Some(3));
    assert_eq!(frame.header_at(25.0).map(|h| h.index), Some(4));

    let frame = sim.scroll_to(natural_top(4));
    assert_eq!(frame.header_at(0.0).map(|h| h.index), Some(4));
}

#[test]
fn jsonl_sweep_is_machine_readable() {
    let mut sim = ScrollSimulation::new(ContentModel::reference());
    let frames = sim.sweep(500.0, 700.0, 50.0);
    let mut buf = Vec::new();
    write_jsonl(&mut buf, &frames).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    for (value, frame) in lines.iter().zip(&frames) {
        assert_eq!(value["scroll"].as_f64(), Some(frame.scroll));
        assert_eq!(value["headers"].as_array().map(Vec::len), Some(50));
        assert_eq!(value["paint_order"].as_array().map(Vec::len), Some(50));
        assert_eq!(value["headers"][0]["priority"], "pinned");
    }
}

#[test]
fn snapshot_of_handoff() {
    let mut sim = ScrollSimulation::new(ContentModel::reference());
    let frame = sim.scroll_to(natural_top(4) - 20.0);
    let text = ascii_snapshot(&frame, 60.0, 10.0);
    let expected = "\
    0 | Heading 3 *
   10 | Heading 3 *
   20 | Heading 4
   30 | Heading 4
   40 | Heading 4
   50 | .
";
    assert_eq!(text, expected);
}
