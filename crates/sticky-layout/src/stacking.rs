#![forbid(unsafe_code)]

//! Paint ordering for sticky headers.
//!
//! Headers are composited in two tiers. Every pinned header paints above
//! every baseline header; within a tier, later headers (in ascending `top`
//! order) paint above earlier ones. A pinned header therefore covers the
//! content scrolling underneath it, and the next header reclaiming the pinned
//! edge covers the one it is pushing out.
//!
//! The tier used for painting comes from
//! [`StickyEngine::paint_tier`](crate::StickyEngine::paint_tier). It equals
//! [`Placement::priority`](crate::Placement::priority) except under the
//! overlap hand-off, where a header sliding over a pinned one paints in the
//! pinned tier.

use serde::{Deserialize, Serialize};

/// Paint tier of a header.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StackPriority {
    /// Scrolling normally with its siblings.
    #[default]
    Baseline,
    /// Held at the pinned edge.
    Pinned,
}

/// Total paint order key: tier first, then natural rank.
///
/// Larger keys paint later (on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StackKey {
    /// Paint tier.
    pub priority: StackPriority,
    /// Index in ascending `top` order.
    pub rank: usize,
}

impl StackKey {
    /// Create a new key.
    #[inline]
    #[must_use]
    pub const fn new(priority: StackPriority, rank: usize) -> Self {
        Self { priority, rank }
    }
}

/// Back-to-front paint order for headers given in natural order.
///
/// Returns indices into `priorities`; the last index is painted topmost.
#[must_use]
pub fn paint_order(priorities: &[StackPriority]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..priorities.len()).collect();
    order.sort_by_key(|&rank| StackKey::new(priorities[rank], rank));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use StackPriority::{Baseline, Pinned};

    #[test]
    fn pinned_paints_above_baseline() {
        assert!(Pinned > Baseline);
        assert!(StackKey::new(Pinned, 0) > StackKey::new(Baseline, 9));
    }

    #[test]
    fn natural_order_breaks_ties() {
        assert!(StackKey::new(Pinned, 3) > StackKey::new(Pinned, 2));
    }

    #[test]
    fn order_groups_tiers() {
        let order = paint_order(&[Pinned, Baseline, Pinned, Baseline]);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn empty_order() {
        assert!(paint_order(&[]).is_empty());
    }

    #[test]
    fn all_baseline_is_identity() {
        assert_eq!(paint_order(&[Baseline; 4]), vec![0, 1, 2, 3]);
    }
}
