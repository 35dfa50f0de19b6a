//! Layout results.

use serde::{Deserialize, Serialize};

/// Position of one visible item's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub item_index: usize,
    pub x: u32,
    pub y: u32,
}

/// Where the overflow indicator goes and how many items it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverflowDescriptor {
    pub x: u32,
    pub y: u32,
    /// Always greater than zero.
    pub hidden_count: usize,
}

/// Output of one layout pass. Replaced wholesale on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Visible items, in input order. Always an index prefix of the input.
    pub placements: Vec<Placement>,
    pub overflow: Option<OverflowDescriptor>,
    pub total_width: u32,
    pub total_height: u32,
}

impl LayoutResult {
    /// The result for an empty input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of items that are painted.
    #[inline]
    pub fn visible_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of items behind the overflow indicator (zero if none).
    #[inline]
    pub fn hidden_count(&self) -> usize {
        self.overflow.map_or(0, |o| o.hidden_count)
    }

    #[inline]
    pub fn has_overflow(&self) -> bool {
        self.overflow.is_some()
    }
}
