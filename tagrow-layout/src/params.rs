//! Layout parameters.
//!
//! `FlowParams` is the validated, typed form: every value is already a
//! non-negative pixel count, so the engine never has to re-check it. Signed
//! or unit-based input goes through [`crate::FlowConfig`] first.

use std::num::NonZeroU32;

use crate::error::LayoutError;
use crate::primitives::Size;

/// Limit on the number of lines a flow may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaxLines {
    /// Stop wrapping after this many lines and show an overflow indicator.
    Limited(NonZeroU32),
    /// Wrap as often as needed; never overflows.
    #[default]
    Unbounded,
}

impl MaxLines {
    /// A line limit, or `None` for zero.
    pub fn new(lines: u32) -> Option<Self> {
        NonZeroU32::new(lines).map(MaxLines::Limited)
    }

    /// Whether `line` (1-based) is the last line the flow may use.
    #[inline]
    pub fn is_last(&self, line: u32) -> bool {
        match self {
            MaxLines::Limited(limit) => line >= limit.get(),
            MaxLines::Unbounded => false,
        }
    }

    pub fn get(&self) -> Option<u32> {
        match self {
            MaxLines::Limited(limit) => Some(limit.get()),
            MaxLines::Unbounded => None,
        }
    }
}

impl TryFrom<i64> for MaxLines {
    type Error = LayoutError;

    fn try_from(lines: i64) -> Result<Self, Self::Error> {
        u32::try_from(lines)
            .ok()
            .and_then(MaxLines::new)
            .ok_or_else(|| LayoutError::invalid("max_lines", "a positive integer", lines))
    }
}

/// Immutable inputs to one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowParams {
    /// Width available to the row.
    pub container_max_width: u32,
    /// Number of lines before the tail is replaced by the indicator.
    pub max_lines: MaxLines,
    /// Gap between neighbouring items on a line.
    pub horizontal_spacing: u32,
    /// Gap between lines.
    pub vertical_spacing: u32,
    /// Measured width of the overflow indicator.
    pub overflow_indicator_width: u32,
    /// Measured height of the overflow indicator. Only affects total height.
    pub overflow_indicator_height: u32,
}

impl FlowParams {
    /// Parameters for a container of the given width, unbounded lines, no spacing.
    pub fn new(container_max_width: u32) -> Self {
        Self {
            container_max_width,
            max_lines: MaxLines::Unbounded,
            horizontal_spacing: 0,
            vertical_spacing: 0,
            overflow_indicator_width: 0,
            overflow_indicator_height: 0,
        }
    }

    /// Set the line limit.
    pub fn max_lines(mut self, max_lines: MaxLines) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set horizontal spacing between items.
    pub fn spacing(mut self, spacing: u32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set vertical spacing between wrapped lines.
    pub fn line_spacing(mut self, spacing: u32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set the measured size of the overflow indicator.
    pub fn indicator(mut self, size: Size) -> Self {
        self.overflow_indicator_width = size.width;
        self.overflow_indicator_height = size.height;
        self
    }

    /// The same parameters with the line limit removed.
    ///
    /// Used by disclosure surfaces so the hidden items never overflow again.
    pub fn unbounded(self) -> Self {
        self.max_lines(MaxLines::Unbounded)
    }
}
