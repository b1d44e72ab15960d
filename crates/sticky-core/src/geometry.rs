#![forbid(unsafe_code)]

//! Vertical geometry primitives.

use serde::{Deserialize, Serialize};

/// Vertical extent of a tracked header.
///
/// Coordinates live in the scroll container's space: `top` is measured from
/// the viewport's top edge and decreases as the user scrolls down. Horizontal
/// extent is irrelevant to stickiness and is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameRect {
    /// Top edge.
    pub top: f64,
    /// Height. Negative values are tolerated and read as zero.
    pub height: f64,
}

impl FrameRect {
    /// The degenerate rectangle every element reports before its first layout.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge (exclusive), using [`effective_height`](Self::effective_height).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.effective_height()
    }

    /// Height clamped to zero. NaN heights also read as zero.
    #[inline]
    #[must_use]
    pub fn effective_height(&self) -> f64 {
        if self.height > 0.0 { self.height } else { 0.0 }
    }

    /// True when both fields are finite numbers.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.height.is_finite()
    }

    /// Check if the rectangle has zero height.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective_height() == 0.0
    }

    /// The same rectangle moved down by `dy`.
    #[inline]
    #[must_use]
    pub fn translated(&self, dy: f64) -> Self {
        Self::new(self.top + dy, self.height)
    }

    /// Check if `y` falls inside `[top, bottom)`.
    #[inline]
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Check if two rectangles share any vertical extent.
    ///
    /// Touching edges do not count as overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.top < other.bottom() && other.top < self.bottom()
    }
}
