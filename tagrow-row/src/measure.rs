//! Chip measurement.
//!
//! Measurement is an external concern for the layout engine: it only ever
//! sees the numbers produced here. Each item is measured exactly once per
//! layout pass.

use tagrow_layout::Size;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("label contains control character {0:?}")]
    ControlCharacter(char),
}

/// Measures the rendered size of a chip with the given label.
///
/// Implementations must be idempotent and side-effect free.
pub trait Measure {
    fn measure(&self, label: &str) -> Result<Size, MeasureError>;
}

impl<F> Measure for F
where
    F: Fn(&str) -> Result<Size, MeasureError>,
{
    fn measure(&self, label: &str) -> Result<Size, MeasureError> {
        self(label)
    }
}

// Metrics for JetBrains Mono at 14px, the chip label font.
const CHAR_WIDTH: f32 = 8.4;
const LINE_HEIGHT: f32 = 18.0;

/// Fixed-advance text measurement: every column is `cell_width` wide.
///
/// Chip size = label columns plus padding on each side, scaled by density
/// and rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub cell_width: f32,
    pub line_height: f32,
    /// Padding on the left and on the right of the label.
    pub padding_x: f32,
    /// Padding above and below the label.
    pub padding_y: f32,
    pub density: f32,
}

impl MonospaceMeasure {
    /// Terminal cells: `[ label ]` on a single row.
    pub fn terminal() -> Self {
        Self {
            cell_width: 1.0,
            line_height: 1.0,
            padding_x: 2.0,
            padding_y: 0.0,
            density: 1.0,
        }
    }

    /// A 32-unit-tall pill chip with 16 units of horizontal padding.
    pub fn chip(density: f32) -> Self {
        Self {
            cell_width: CHAR_WIDTH,
            line_height: LINE_HEIGHT,
            padding_x: 16.0,
            padding_y: 7.0,
            density,
        }
    }

    /// Display columns of `label` (1 for Latin, 2 for CJK, 0 for combining marks).
    pub fn columns(label: &str) -> Result<usize, MeasureError> {
        label.chars().try_fold(0, |cols, c| {
            if c.is_control() {
                return Err(MeasureError::ControlCharacter(c));
            }
            Ok(cols + UnicodeWidthChar::width(c).unwrap_or(0))
        })
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::chip(1.0)
    }
}

impl Measure for MonospaceMeasure {
    fn measure(&self, label: &str) -> Result<Size, MeasureError> {
        let columns = Self::columns(label)? as f32;
        let width = (columns * self.cell_width + 2.0 * self.padding_x) * self.density;
        let height = (self.line_height + 2.0 * self.padding_y) * self.density;
        Ok(Size::new(width.round() as u32, height.round() as u32))
    }
}
