#![forbid(unsafe_code)]

//! Tracked element identity.

use serde::{Deserialize, Serialize};

/// Identity of one tracked header.
///
/// Ids are only used to match an element against its own entry in a
/// [`FrameCollection`](crate::FrameCollection); they carry no persistence
/// meaning. Registries hand them out in mount order, so comparing ids also
/// compares registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
