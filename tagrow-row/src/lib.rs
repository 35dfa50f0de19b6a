//! Tagrow Row - Measure, lay out, and disclose a truncated chip row.
//!
//! This crate glues the pure layout engine to the things around it:
//! - Measurement of chip labels (`Measure`, `MonospaceMeasure`)
//! - The "N+ more" indicator label and its once-per-pass measurement
//! - `FlowRow`, which measures every item once and runs the engine
//! - `OverflowController`, which remembers the last result and hands the
//!   hidden items to a `DisclosureSurface` when the indicator is activated

mod controller;
mod disclosure;
mod error;
mod indicator;
mod measure;
mod row;

pub use controller::OverflowController;
pub use disclosure::{DisclosureSheet, DisclosureSurface};
pub use error::RowError;
pub use indicator::{indicator_label, indicator_template};
pub use measure::{Measure, MeasureError, MonospaceMeasure};
pub use row::{FlowRow, RowLayout};
