#![forbid(unsafe_code)]

//! Deterministic scroll replay.
//!
//! A [`ScrollSimulation`] plays the part of the layout engine: for a scroll
//! position `s` it reports every header at `natural_top - s`, exactly as a
//! real container would after a layout pass, then pulls each header's
//! placement from its [`TrackedElement`].

use serde::{Deserialize, Serialize};
use sticky_core::{FrameRect, StickyConfig};
use sticky_layout::{Placement, StackPriority, StickyEngine};
use sticky_runtime::{FrameRegistry, TrackedElement};
use tracing::debug_span;

use crate::content::ContentModel;

/// One header in one simulated frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderFrame {
    /// Section index in document order.
    pub index: usize,
    /// Unscrolled top in content space.
    pub natural_top: f64,
    /// Observed rectangle (viewport-relative).
    pub rect: FrameRect,
    /// Engine output.
    pub placement: Placement,
    /// Paint tier.
    pub priority: StackPriority,
    /// Rectangle after applying the offset.
    pub rendered: FrameRect,
}

/// Everything the renderer would need for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Scroll position of this frame.
    pub scroll: f64,
    /// Collection version after the frame's reports.
    pub version: u64,
    /// Headers in document order.
    pub headers: Vec<HeaderFrame>,
    /// Header indices back to front.
    pub paint_order: Vec<usize>,
}

impl FrameRecord {
    /// Indices of headers currently sticking.
    pub fn sticking(&self) -> impl Iterator<Item = usize> + '_ {
        self.headers
            .iter()
            .filter(|h| h.placement.sticking)
            .map(|h| h.index)
    }

    /// The header painted topmost over viewport row `y`, if any.
    #[must_use]
    pub fn header_at(&self, y: f64) -> Option<&HeaderFrame> {
        self.paint_order
            .iter()
            .rev()
            .map(|&i| &self.headers[i])
            .find(|h| h.rendered.contains(y))
    }

    /// Pairs of headers whose rendered extents overlap by more than
    /// `tolerance`.
    #[must_use]
    pub fn overlapping_pairs(&self, tolerance: f64) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.headers.iter().enumerate() {
            for b in self.headers[i + 1..]
                .iter()
                .filter(|b| a.rendered.overlaps(&b.rendered))
            {
                let depth = a.rendered.bottom().min(b.rendered.bottom())
                    - a.rendered.top.max(b.rendered.top);
                if depth > tolerance {
                    pairs.push((a.index, b.index));
                }
            }
        }
        pairs
    }
}

/// A scroll container with one tracked element per section header.
#[derive(Debug)]
pub struct ScrollSimulation {
    model: ContentModel,
    natural_tops: Vec<f64>,
    registry: FrameRegistry,
    headers: Vec<TrackedElement>,
    scroll: f64,
}

impl ScrollSimulation {
    /// Most frames a single [`sweep`](Self::sweep) produces.
    pub const MAX_SWEEP_FRAMES: usize = 100_000;

    /// Number of frames `sweep(start, end, step)` would produce without the
    /// [`MAX_SWEEP_FRAMES`](Self::MAX_SWEEP_FRAMES) cap. Saturates at
    /// `u64::MAX`.
    #[must_use]
    pub fn sweep_frame_count(start: f64, end: f64, step: f64) -> u64 {
        if !(step.is_finite() && step > 0.0 && start.is_finite() && end.is_finite()) {
            return 1;
        }
        if start > end {
            return 0;
        }
        // Float to int casts saturate.
        (((end - start) / step).floor() as u64).saturating_add(1)
    }

    /// Mount every header of `model` with the default configuration.
    #[must_use]
    pub fn new(model: ContentModel) -> Self {
        Self::with_config(model, StickyConfig::default())
    }

    /// Mount every header of `model` sharing one engine configuration.
    #[must_use]
    pub fn with_config(model: ContentModel, config: StickyConfig) -> Self {
        let registry = FrameRegistry::new();
        let engine = StickyEngine::new(config);
        let natural_tops = model.header_tops();
        let headers = natural_tops
            .iter()
            .map(|_| TrackedElement::mount_with(&registry, engine))
            .collect();
        Self {
            model,
            natural_tops,
            registry,
            headers,
            scroll: 0.0,
        }
    }

    /// Content being scrolled.
    #[must_use]
    pub fn model(&self) -> &ContentModel {
        &self.model
    }

    /// Shared registry.
    #[must_use]
    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    /// Mounted headers in document order.
    #[must_use]
    pub fn headers(&self) -> &[TrackedElement] {
        &self.headers
    }

    /// Current scroll position.
    #[must_use]
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Lay out at `scroll` and capture the resulting frame.
    pub fn scroll_to(&mut self, scroll: f64) -> FrameRecord {
        let _span = debug_span!("scroll_frame", scroll).entered();
        self.scroll = scroll;
        for ((header, natural_top), section) in self
            .headers
            .iter()
            .zip(&self.natural_tops)
            .zip(&self.model.sections)
        {
            header.observe(FrameRect::new(natural_top - scroll, section.header_height));
        }
        self.record()
    }

    /// Frames for `start, start + step, ..` up to and including `end`.
    ///
    /// A non-positive or non-finite step, or a non-finite bound, yields only
    /// the `start` frame. Stops after
    /// [`MAX_SWEEP_FRAMES`](Self::MAX_SWEEP_FRAMES) frames.
    pub fn sweep(&mut self, start: f64, end: f64, step: f64) -> Vec<FrameRecord> {
        if !(step.is_finite() && step > 0.0 && start.is_finite() && end.is_finite()) {
            return vec![self.scroll_to(start)];
        }
        let mut frames = Vec::new();
        let mut i = 0u32;
        while frames.len() < Self::MAX_SWEEP_FRAMES {
            let scroll = start + step * f64::from(i);
            if scroll > end {
                break;
            }
            frames.push(self.scroll_to(scroll));
            i += 1;
        }
        frames
    }

    /// Capture the current frame without reporting anything.
    #[must_use]
    pub fn record(&self) -> FrameRecord {
        let headers: Vec<HeaderFrame> = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, el)| {
                let rect = el.frame();
                let placement = el.placement();
                HeaderFrame {
                    index,
                    natural_top: self.natural_tops[index],
                    rect,
                    placement,
                    priority: placement.priority(),
                    rendered: placement.rendered(rect),
                }
            })
            .collect();

        let mut paint_order: Vec<usize> = (0..headers.len()).collect();
        paint_order.sort_by_key(|&i| self.headers[i].stack_key());

        FrameRecord {
            scroll: self.scroll,
            version: self.registry.version(),
            headers,
            paint_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sticky_core::HandoffPolicy;

    fn small() -> ContentModel {
        ContentModel::uniform(0.0, 3, 40.0, 60.0)
    }

    #[test]
    fn at_rest_nothing_sticks() {
        let mut sim = ScrollSimulation::new(small());
        let frame = sim.scroll_to(0.0);
        // Header 0 sits exactly on the pinned edge, which is not sticking.
        assert_eq!(frame.sticking().count(), 0);
        assert!(frame.headers.iter().all(|h| h.placement.offset == 0.0));
    }

    #[test]
    fn first_header_pins_then_hands_off() {
        let mut sim = ScrollSimulation::new(small());

        let frame = sim.scroll_to(30.0);
        assert_eq!(frame.sticking().collect::<Vec<_>>(), vec![0]);
        assert_eq!(frame.headers[0].rendered.top, 0.0);

        // Header 1 natural top is 100; at scroll 80 it is at 20, inside
        // header 0's 40-unit reach.
        let frame = sim.scroll_to(80.0);
        assert_eq!(frame.headers[0].rendered.bottom(), 20.0);
        assert_eq!(frame.header_at(10.0).map(|h| h.index), Some(0));
        assert_eq!(frame.header_at(25.0).map(|h| h.index), Some(1));

        let frame = sim.scroll_to(100.0);
        assert_eq!(frame.header_at(0.0).map(|h| h.index), Some(1));
    }

    #[test]
    fn paint_order_puts_pinned_last() {
        let mut sim = ScrollSimulation::new(small());
        let frame = sim.scroll_to(120.0);
        // Headers 0 and 1 have scrolled past; header 2 has not.
        assert_eq!(frame.paint_order, vec![2, 0, 1]);
    }

    #[test]
    fn overlap_policy_lets_headers_cover_each_other() {
        let config = StickyConfig::default().with_handoff(HandoffPolicy::Overlap);
        let mut sim = ScrollSimulation::with_config(small(), config);
        let frame = sim.scroll_to(80.0);
        assert_eq!(frame.headers[0].rendered.top, 0.0);
        assert_eq!(frame.overlapping_pairs(1e-9), vec![(0, 1)]);
        // Header 1 slides over the pinned header 0 without being pinned.
        assert_eq!(frame.paint_order, vec![2, 0, 1]);
        assert_eq!(frame.headers[1].priority, StackPriority::Baseline);
        assert_eq!(frame.header_at(25.0).map(|h| h.index), Some(1));
        assert_eq!(frame.header_at(10.0).map(|h| h.index), Some(0));
    }

    #[test]
    fn sweep_is_inclusive_and_bounded() {
        let mut sim = ScrollSimulation::new(small());
        let frames = sim.sweep(0.0, 100.0, 25.0);
        let scrolls: Vec<f64> = frames.iter().map(|f| f.scroll).collect();
        assert_eq!(scrolls, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(sim.sweep(10.0, 100.0, 0.0).len(), 1);
        assert_eq!(sim.sweep(10.0, f64::INFINITY, 5.0).len(), 1);
        assert_eq!(sim.sweep(50.0, 10.0, 5.0).len(), 0);
    }

    #[test]
    fn sweep_frame_count_matches_sweep() {
        let mut sim = ScrollSimulation::new(small());
        for (start, end, step) in [(0.0, 100.0, 25.0), (10.0, 100.0, 0.0), (50.0, 10.0, 5.0)] {
            assert_eq!(
                ScrollSimulation::sweep_frame_count(start, end, step),
                sim.sweep(start, end, step).len() as u64,
                "sweep({start}, {end}, {step})"
            );
        }
    }

    #[test]
    fn sweep_frame_count_saturates() {
        assert_eq!(ScrollSimulation::sweep_frame_count(0.0, 1e300, 1e-300), u64::MAX);
        assert!(
            ScrollSimulation::sweep_frame_count(0.0, 1e12, 1.0)
                > ScrollSimulation::MAX_SWEEP_FRAMES as u64
        );
    }

    #[test]
    fn record_without_scroll_matches_last_frame() {
        let mut sim = ScrollSimulation::new(small());
        let frame = sim.scroll_to(55.0);
        assert_eq!(sim.record(), frame);
    }

    #[test]
    fn dropping_simulation_empties_registry() {
        let sim = ScrollSimulation::new(small());
        let registry = sim.registry().clone();
        assert_eq!(registry.len(), 3);
        drop(sim);
        assert!(registry.is_empty());
    }
}
