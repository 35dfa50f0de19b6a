//! End-to-end layout scenarios with literal values.
//!
//! Each scenario is worked through by hand in the comments so a failing
//! assertion points straight at the step that diverged.

use tagrow_layout::{FlowParams, LayoutResult, MaxLines, MeasuredItem, Size, layout};

const ITEM_HEIGHT: u32 = 32;

fn uniform(count: usize, width: u32) -> Vec<MeasuredItem> {
    vec![MeasuredItem::new(width, ITEM_HEIGHT); count]
}

fn limited(lines: u32) -> MaxLines {
    MaxLines::new(lines).expect("non-zero line limit")
}

/// Holds for every result, whatever the inputs.
fn assert_consistent(items: &[MeasuredItem], params: &FlowParams, result: &LayoutResult) {
    for (expected, placement) in result.placements.iter().enumerate() {
        assert_eq!(placement.item_index, expected, "placements must be a prefix");
        let width = items[placement.item_index].width;
        if placement.x > 0 || width <= params.container_max_width {
            assert!(
                placement.x + width <= params.container_max_width,
                "item {} overruns the container",
                placement.item_index
            );
        }
    }
    if let Some(overflow) = result.overflow {
        assert!(overflow.hidden_count > 0);
        assert_eq!(overflow.hidden_count + result.visible_count(), items.len());
    } else {
        assert_eq!(result.visible_count(), items.len());
    }
}

#[test]
fn two_lines_fill_without_overflow() {
    // Line 1: 0, 60, 120 (right edge 170); item 3 at 180 would end at 230.
    // Line 2 is the last: item 3 + spacing + indicator = 120 fits, item 4
    // has no successor so it only has to fit itself (60 + 50 = 110).
    let items = uniform(5, 50);
    let params = FlowParams::new(200)
        .spacing(10)
        .line_spacing(8)
        .max_lines(limited(2))
        .indicator(Size::new(60, ITEM_HEIGHT));

    let result = layout(&items, &params);
    assert_consistent(&items, &params, &result);

    let origins: Vec<(u32, u32)> = result.placements.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(origins, vec![(0, 0), (60, 0), (120, 0), (0, 40), (60, 40)]);
    assert!(result.overflow.is_none());
    assert_eq!(result.total_width, 170);
    assert_eq!(result.total_height, 72);
}

#[test]
fn extra_items_overflow_on_last_line() {
    // Same geometry, seven items. Line 2: item 3 at 0, item 4 at 60 (needs
    // 60 + 50 + 10 + 60 = 180), item 5 at 120 would need 240 with the
    // indicator, so the indicator takes x = 120 and hides items 5 and 6.
    let items = uniform(7, 50);
    let params = FlowParams::new(200)
        .spacing(10)
        .max_lines(limited(2))
        .indicator(Size::new(60, ITEM_HEIGHT));

    let result = layout(&items, &params);
    assert_consistent(&items, &params, &result);

    assert_eq!(result.visible_count(), 5);
    let overflow = result.overflow.expect("overflow");
    assert_eq!((overflow.x, overflow.y), (120, 32));
    assert_eq!(overflow.hidden_count, 2);
    assert_eq!(result.total_width, 180);
}

#[test]
fn oversized_items_single_line_hides_rest() {
    let items = uniform(3, 300);
    let params = FlowParams::new(200)
        .spacing(10)
        .max_lines(limited(1))
        .indicator(Size::new(60, ITEM_HEIGHT));

    let result = layout(&items, &params);
    assert_consistent(&items, &params, &result);

    assert_eq!(result.visible_count(), 1);
    assert_eq!(result.placements[0].x, 0);
    let overflow = result.overflow.expect("overflow");
    assert_eq!(overflow.hidden_count, 2);
    assert_eq!((overflow.x, overflow.y), (310, 0));
    assert_eq!(result.total_height, ITEM_HEIGHT);
}

#[test]
fn empty_input_has_no_size() {
    let params = FlowParams::new(200).max_lines(limited(3));
    let result = layout(&[], &params);

    assert!(result.placements.is_empty());
    assert!(!result.has_overflow());
    assert_eq!(result.total_width, 0);
    assert_eq!(result.total_height, 0);
}

#[test]
fn single_line_fits_at_minimum_line_limit() {
    let items = uniform(3, 40);
    let params = FlowParams::new(200)
        .spacing(8)
        .max_lines(limited(1))
        .indicator(Size::new(100, ITEM_HEIGHT));

    let result = layout(&items, &params);
    assert_consistent(&items, &params, &result);

    // Items 0 and 1 each leave room for the indicator (48 + 40 + 8 + 100).
    assert!(result.overflow.is_none());
    assert_eq!(result.visible_count(), 3);
    assert_eq!(result.total_width, 136);
}

#[test]
fn max_lines_reached_exactly_as_items_run_out() {
    // Two full lines of two items each, nothing left over.
    let items = uniform(4, 90);
    let params = FlowParams::new(190)
        .spacing(10)
        .max_lines(limited(2))
        .indicator(Size::new(80, ITEM_HEIGHT));

    let result = layout(&items, &params);
    assert_consistent(&items, &params, &result);

    // Item 2 on the last line: 0 + 90 + 10 + 80 = 180 fits.
    assert!(result.overflow.is_none());
    assert_eq!(result.placements[3].x, 100);
    assert_eq!(result.placements[3].y, ITEM_HEIGHT);
}

#[test]
fn unbounded_never_overflows() {
    let items = uniform(40, 70);
    let params = FlowParams::new(150)
        .spacing(5)
        .indicator(Size::new(500, ITEM_HEIGHT));

    let result = layout(&items, &params);
    assert_consistent(&items, &params, &result);
    assert!(result.overflow.is_none());
    // Two per line: 0 and 75.
    assert_eq!(result.placements[39].y, 19 * ITEM_HEIGHT);
}

#[test]
fn mixed_widths_programming_language_row() {
    // Chip widths of a typical tag row at 1x: label + 32px padding.
    let widths = [86, 78, 75, 100, 68, 124, 78, 70, 83, 78, 126, 74, 80];
    let items: Vec<MeasuredItem> = widths
        .iter()
        .map(|&w| MeasuredItem::new(w, ITEM_HEIGHT))
        .collect();
    let params = FlowParams::new(360)
        .spacing(8)
        .line_spacing(8)
        .max_lines(limited(2))
        .indicator(Size::new(96, ITEM_HEIGHT));

    let result = layout(&items, &params);
    assert_consistent(&items, &params, &result);

    // Line 1: 0, 94, 180; item 3 at 263 would end at 363, so it wraps.
    // Line 2: 0, 108; item 5 at 184 fits alone (308) but needs 412 with
    // the indicator, so the indicator goes at 184.
    assert_eq!(result.visible_count(), 5);
    let overflow = result.overflow.expect("overflow");
    assert_eq!(overflow.hidden_count, 8);
    assert_eq!((overflow.x, overflow.y), (184, 40));
    assert_eq!(result.total_width, 280);
    assert_eq!(result.total_height, 72);
}
