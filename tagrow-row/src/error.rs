//! Row error types.

use tagrow_layout::LayoutError;
use thiserror::Error;

use crate::measure::MeasureError;

#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("failed to measure item {index}: {source}")]
    Measure {
        index: usize,
        #[source]
        source: MeasureError,
    },
}
