//! Measured items - the engine's only view of the content it lays out.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, non_negative};
use crate::primitives::Size;

/// The rendered size of one item, produced by an external measurement pass.
///
/// Items are identified by their position in the input slice; the engine
/// never looks at what the item actually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeasuredItem {
    pub width: u32,
    pub height: u32,
}

impl MeasuredItem {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Validate a raw measurement coming from a signed source.
    pub fn try_new(width: i64, height: i64) -> Result<Self, LayoutError> {
        Ok(Self {
            width: non_negative("item width", width)?,
            height: non_negative("item height", height)?,
        })
    }
}

impl From<Size> for MeasuredItem {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
