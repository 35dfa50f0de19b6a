//! The "N+ more" overflow indicator.
//!
//! The indicator is measured once per pass, from a template label at least as
//! wide as any count the pass can produce, and that width is what the engine
//! reserves. The painted indicator then shows the real count from the layout
//! result.

use tagrow_layout::Size;

use crate::measure::Measure;

/// Smallest count the template is sized for.
const TEMPLATE_COUNT: usize = 99;

/// Text painted on the indicator for `hidden` items.
pub fn indicator_label(hidden: usize) -> String {
    format!("{hidden}+ more")
}

/// Label used to size the indicator before the hidden count is known.
///
/// At most `item_count` items can be hidden, so a label for that many is
/// never narrower than the one painted.
pub fn indicator_template(item_count: usize) -> String {
    indicator_label(item_count.max(TEMPLATE_COUNT))
}

/// Measure the indicator template for a pass over `item_count` items.
///
/// A failed measurement degrades to a zero-width indicator: it always fits,
/// so the row still renders.
pub(crate) fn measure_indicator<M: Measure>(measure: &M, item_count: usize) -> Size {
    match measure.measure(&indicator_template(item_count)) {
        Ok(size) => {
            if size.width == 0 {
                tracing::warn!("overflow indicator measured zero width");
            }
            size
        }
        Err(e) => {
            tracing::warn!("Failed to measure overflow indicator: {}", e);
            Size::ZERO
        }
    }
}
