//! FlowRow - measure a row of chips once and lay it out.

use tagrow_api::ChipLabel;
use tagrow_layout::{FlowConfig, FlowParams, LayoutResult, MeasuredItem, Size, layout};

use crate::error::RowError;
use crate::indicator::{indicator_label, measure_indicator};
use crate::measure::Measure;

/// A chip row: a measurer plus the row's configuration.
///
/// Every call to [`FlowRow::layout`] is an independent pass: items and the
/// indicator are measured once, the configuration is validated, and the
/// engine runs. Nothing is carried over to the next call.
#[derive(Debug, Clone)]
pub struct FlowRow<M> {
    measure: M,
    config: FlowConfig,
}

/// Everything a caller needs to paint one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub result: LayoutResult,
    /// Measured size of every input item, by index.
    pub sizes: Vec<MeasuredItem>,
    /// Measured size of the indicator template.
    pub indicator: Size,
}

impl RowLayout {
    /// Label for the indicator, if one is shown.
    pub fn indicator_label(&self) -> Option<String> {
        self.result
            .overflow
            .map(|overflow| indicator_label(overflow.hidden_count))
    }
}

impl<M: Measure> FlowRow<M> {
    pub fn new(measure: M, config: FlowConfig) -> Self {
        Self { measure, config }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn measurer(&self) -> &M {
        &self.measure
    }

    /// Validated parameters for a pass over `item_count` items.
    pub fn params(&self, item_count: usize) -> Result<FlowParams, RowError> {
        Ok(self
            .config
            .to_params(measure_indicator(&self.measure, item_count))?)
    }

    /// Measure every item, in order.
    pub fn measure_items<T: ChipLabel>(&self, items: &[T]) -> Result<Vec<MeasuredItem>, RowError> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.measure
                    .measure(item.chip_label())
                    .map(MeasuredItem::from)
                    .map_err(|source| RowError::Measure { index, source })
            })
            .collect()
    }

    /// Lay out `items` with the configured line limit.
    pub fn layout<T: ChipLabel>(&self, items: &[T]) -> Result<RowLayout, RowError> {
        let params = self.params(items.len())?;
        self.run(items, params)
    }

    /// Lay out `items` ignoring the line limit, so nothing overflows.
    pub fn layout_unbounded<T: ChipLabel>(&self, items: &[T]) -> Result<RowLayout, RowError> {
        let params = self.params(items.len())?.unbounded();
        self.run(items, params)
    }

    fn run<T: ChipLabel>(&self, items: &[T], params: FlowParams) -> Result<RowLayout, RowError> {
        let sizes = self.measure_items(items)?;
        let result = layout(&sizes, &params);
        Ok(RowLayout {
            result,
            sizes,
            indicator: Size::new(
                params.overflow_indicator_width,
                params.overflow_indicator_height,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{MeasureError, MonospaceMeasure};
    use tagrow_api::{ProgrammingLanguages, Tag, TagSource};

    fn terminal_row(width: i64, max_lines: Option<i64>) -> FlowRow<MonospaceMeasure> {
        FlowRow::new(
            MonospaceMeasure::terminal(),
            FlowConfig {
                container_width: width,
                max_lines,
                horizontal_spacing: 1.0,
                vertical_spacing: 0.0,
                density: 1.0,
            },
        )
    }

    #[test]
    fn test_programming_languages_two_lines() {
        let tags = ProgrammingLanguages.tags();
        let row = terminal_row(40, Some(2));

        let layout = row.layout(&tags).unwrap();

        // Kotlin(10) Java(8) C++(7) Python(10) -> 0, 11, 20, 28; GO wraps.
        // Line 2 must leave room for the 12-wide indicator: GO at 0,
        // Javascript at 7, then Dart at 22 would need 22 + 8 + 1 + 12 > 40.
        assert_eq!(layout.result.visible_count(), 6);
        assert_eq!(layout.indicator_label().as_deref(), Some("14+ more"));
        let overflow = layout.result.overflow.unwrap();
        assert_eq!((overflow.x, overflow.y), (22, 1));
        assert_eq!(layout.sizes.len(), 20);
    }

    #[test]
    fn test_unbounded_shows_everything() {
        let tags = ProgrammingLanguages.tags();
        let layout = terminal_row(40, Some(1)).layout_unbounded(&tags).unwrap();

        assert!(layout.result.overflow.is_none());
        assert_eq!(layout.result.visible_count(), tags.len());
        assert_eq!(layout.indicator_label(), None);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_measuring() {
        let counting = std::cell::Cell::new(0);
        let measure = |label: &str| -> Result<Size, MeasureError> {
            counting.set(counting.get() + 1);
            MonospaceMeasure::terminal().measure(label)
        };
        let row = FlowRow::new(
            measure,
            FlowConfig {
                max_lines: Some(0),
                ..FlowConfig::default()
            },
        );

        let err = row.layout(&[Tag::new("a", "A")]).unwrap_err();
        assert!(matches!(err, RowError::Layout(_)));
        // Only the indicator template was measured.
        assert_eq!(counting.get(), 1);
    }

    #[test]
    fn test_measure_error_reports_index() {
        let row = terminal_row(40, None);
        let tags = vec![Tag::new("ok", "Fine"), Tag::new("bad", "Tab\there")];

        let err = row.layout(&tags).unwrap_err();
        assert!(matches!(err, RowError::Measure { index: 1, .. }));
    }

    #[test]
    fn test_indicator_reserves_room_for_three_digit_counts() {
        let tags: Vec<Tag> = (0..120).map(|i| Tag::new(format!("x{i}"), "X")).collect();
        let layout = terminal_row(20, Some(1)).layout(&tags).unwrap();

        // "120+ more" in brackets is 13 wide: X at 0 leaves 0 + 5 + 1 + 13 = 19.
        assert_eq!(layout.indicator, Size::new(13, 1));
        assert_eq!(layout.result.visible_count(), 1);
        assert_eq!(layout.indicator_label().as_deref(), Some("119+ more"));
        assert_eq!(layout.result.total_width, 19);
    }

    #[test]
    fn test_each_item_measured_once() {
        let counting = std::cell::Cell::new(0);
        let measure = |label: &str| -> Result<Size, MeasureError> {
            counting.set(counting.get() + 1);
            MonospaceMeasure::terminal().measure(label)
        };
        let row = FlowRow::new(measure, FlowConfig::default());

        row.layout(&ProgrammingLanguages.tags()).unwrap();
        assert_eq!(counting.get(), 20 + 1);
    }
}
