#![forbid(unsafe_code)]

//! Per-header offset computation.
//!
//! # Algorithm
//!
//! With pinned edge `inset` (0 by default) and header rectangle `r`:
//!
//! 1. The header sticks iff `r.top < inset`. Otherwise the offset is 0.
//! 2. A sticking header is shifted by `inset - r.top`, which cancels the
//!    scroll and puts its rendered top on the pinned edge.
//! 3. The first rectangle `o` (ascending by top) with
//!    `o.top > r.top && o.top < inset + r.height` is intruding. Under
//!    [`HandoffPolicy::Push`] the offset shrinks by
//!    `inset + r.height - o.top`, the depth of the intrusion.
//!
//! The intrusion term is 0 when `o.top` sits exactly one header height below
//! the pinned edge and grows linearly as `o` rises, so the offset is
//! continuous across the search boundary. When `o` reaches the pinned edge
//! the header has been pushed up by exactly its own height.
//!
//! Only the nearest intruder is considered. For non-overlapping headers it is
//! also the deepest one, so headers packed three or more deep still hand off
//! edge to edge.
//!
//! Under [`HandoffPolicy::Overlap`] nothing is pushed. Instead
//! [`StickyEngine::paint_tier`] lifts the intruder into the pinned tier so it
//! paints over the header it is sliding across.
//!
//! # Failure Modes
//!
//! | Input                          | Result                          |
//! |--------------------------------|---------------------------------|
//! | NaN or infinite `top`/`height` | [`Placement::RESTING`]          |
//! | Negative height                | [`Placement::RESTING`]          |
//! | Non-finite rect in collection  | never chosen as intruder        |
//! | No intruder                    | fully pinned (not an error)     |

use serde::{Deserialize, Serialize};
use sticky_core::{FrameCollection, FrameRect, HandoffPolicy, StickyConfig};

use crate::stacking::StackPriority;

/// Offset and sticking state for one header in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    /// Vertical shift added to the header's natural position.
    pub offset: f64,
    /// True when the header's natural top is above the pinned edge.
    pub sticking: bool,
}

impl Placement {
    /// A header scrolling normally.
    pub const RESTING: Self = Self {
        offset: 0.0,
        sticking: false,
    };

    /// Paint tier for this placement.
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> StackPriority {
        if self.sticking {
            StackPriority::Pinned
        } else {
            StackPriority::Baseline
        }
    }

    /// Where the header ends up once the offset is applied.
    #[inline]
    #[must_use]
    pub fn rendered(&self, rect: FrameRect) -> FrameRect {
        rect.translated(self.offset)
    }
}

/// Offset engine for one list of sticky headers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickyEngine {
    config: StickyConfig,
}

impl StickyEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub const fn new(config: StickyConfig) -> Self {
        Self { config }
    }

    /// Compute the placement of `this` against a sorted collection.
    #[must_use]
    pub fn place(&self, this: FrameRect, all: &FrameCollection) -> Placement {
        self.place_among(this, all.rects())
    }

    /// Compute the placement of `this` against rectangles in ascending `top`
    /// order. `this` may appear among them; it never intrudes on itself.
    #[must_use]
    pub fn place_among(
        &self,
        this: FrameRect,
        sorted: impl IntoIterator<Item = FrameRect>,
    ) -> Placement {
        let inset = self.config.top_inset;
        if !this.is_finite() || !inset.is_finite() || this.height < 0.0 || this.top >= inset {
            return Placement::RESTING;
        }

        let mut offset = inset - this.top;
        if self.config.handoff == HandoffPolicy::Push
            && let Some(other) = self.intruder(this, sorted)
        {
            offset -= inset + this.effective_height() - other.top;
        }
        Placement {
            offset,
            sticking: true,
        }
    }

    /// The first rectangle close enough below `this` to push it.
    ///
    /// "Close enough" is measured against `this` header's own height, not the
    /// other's.
    #[must_use]
    pub fn intruder(
        &self,
        this: FrameRect,
        sorted: impl IntoIterator<Item = FrameRect>,
    ) -> Option<FrameRect> {
        let reach = self.config.top_inset + this.effective_height();
        sorted
            .into_iter()
            .find(|other| other.is_finite() && other.top > this.top && other.top < reach)
    }

    /// Paint tier of `this` among `all`.
    ///
    /// Sticking headers are [`StackPriority::Pinned`]. Under
    /// [`HandoffPolicy::Overlap`] a resting header that intrudes on a sticking
    /// one is pinned too, so natural order puts it above the header it covers.
    #[must_use]
    pub fn paint_tier(&self, this: FrameRect, all: &FrameCollection) -> StackPriority {
        let placement = self.place(this, all);
        if placement.sticking || self.config.handoff != HandoffPolicy::Overlap {
            return placement.priority();
        }
        let covers_pinned = all.rects().any(|pinned| {
            self.place(pinned, all).sticking
                && self.intruder(pinned, all.rects()) == Some(this)
        });
        if covers_pinned {
            StackPriority::Pinned
        } else {
            StackPriority::Baseline
        }
    }
}

/// Placement of `this` under the default configuration.
#[must_use]
pub fn compute_offset(this: FrameRect, all: &FrameCollection) -> Placement {
    StickyEngine::default().place(this, all)
}
