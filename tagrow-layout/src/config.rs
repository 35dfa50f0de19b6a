//! Boundary configuration for a flow row.
//!
//! `FlowConfig` is what users write (JSON, CLI flags): signed widths and
//! spacing in density-independent units. [`FlowConfig::to_params`] checks it
//! and converts it into pixel-valued [`FlowParams`] before any layout runs.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, non_negative};
use crate::params::{FlowParams, MaxLines};
use crate::primitives::Size;

/// Default gap between chips and between lines, in density-independent units.
pub const DEFAULT_SPACING: f32 = 8.0;
pub const DEFAULT_CONTAINER_WIDTH: i64 = 360;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Available width in pixels.
    pub container_width: i64,
    /// Line limit; `None` means unbounded.
    pub max_lines: Option<i64>,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    /// Pixels per density-independent unit.
    pub density: f32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            container_width: DEFAULT_CONTAINER_WIDTH,
            max_lines: None,
            horizontal_spacing: DEFAULT_SPACING,
            vertical_spacing: DEFAULT_SPACING,
            density: 1.0,
        }
    }
}

impl FlowConfig {
    /// Validate and convert into layout parameters.
    ///
    /// `indicator` is the already-measured size of the overflow indicator.
    pub fn to_params(&self, indicator: Size) -> Result<FlowParams, LayoutError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(LayoutError::invalid(
                "density",
                "a positive finite number",
                self.density,
            ));
        }

        let max_lines = match self.max_lines {
            Some(lines) => MaxLines::try_from(lines)?,
            None => MaxLines::Unbounded,
        };

        Ok(FlowParams::new(non_negative("container_width", self.container_width)?)
            .max_lines(max_lines)
            .spacing(self.round_to_px("horizontal_spacing", self.horizontal_spacing)?)
            .line_spacing(self.round_to_px("vertical_spacing", self.vertical_spacing)?)
            .indicator(indicator))
    }

    /// Convert density-independent units to whole pixels.
    pub fn round_to_px(&self, field: &'static str, units: f32) -> Result<u32, LayoutError> {
        if !units.is_finite() || units < 0.0 {
            return Err(LayoutError::invalid(field, "a non-negative number", units));
        }
        // `as` saturates at u32::MAX.
        Ok((units * self.density).round() as u32)
    }
}
